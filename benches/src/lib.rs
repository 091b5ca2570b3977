#![feature(test)]

extern crate test;

const SENTENCE: &str = "\u{0633}\u{0644}\u{0627}\u{0645} \u{062F}\u{0646}\u{06CC}\u{0627}! \
                        \u{0627}\u{0645}\u{0631}\u{0648}\u{0632} \u{06F1}\u{06F4}\u{06F0}\u{06F2} \
                        \u{06A9}\u{062A}\u{0627}\u{0628} \u{0628}\u{0647} 12345 \u{0635}\u{0641}\u{062D}\u{0647}.";

macro_rules! simple_bench {
    ($name:ident, $text:expr, $repeat:expr) => {
        mod $name {
            use test::Bencher;

            #[bench]
            fn shape_str(bencher: &mut Bencher) {
                let text = $text.repeat($repeat);
                bencher.iter(|| {
                    test::black_box(persianbuzz::shape_str(&text));
                })
            }

            #[bench]
            fn shape_buffer(bencher: &mut Bencher) {
                let text = $text.repeat($repeat);
                let mut buffer = persianbuzz::UnicodeBuffer::new();
                bencher.iter(|| {
                    buffer.push_str(&text);
                    let glyphs = persianbuzz::shape(std::mem::take(&mut buffer));
                    test::black_box(glyphs.len());
                    buffer = glyphs.clear();
                })
            }
        }
    };
}

simple_bench!(sentence, super::SENTENCE, 1);
simple_bench!(paragraph, super::SENTENCE, 32);
simple_bench!(long_number, "9", 4096);
