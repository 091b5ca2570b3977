struct Args {
    keep_digit_order: bool,
    shape_single_letter: bool,
    decimal: bool,
    no_unicode_prefix: bool,
}

fn parse_args(args: Vec<std::ffi::OsString>) -> Result<Args, pico_args::Error> {
    let mut parser = pico_args::Arguments::from_vec(args);
    let args = Args {
        keep_digit_order: parser.contains("--keep-digit-order"),
        shape_single_letter: parser.contains("--shape-single-letter"),
        decimal: parser.contains("--decimal"),
        no_unicode_prefix: parser.contains("--no-unicode-prefix"),
    };

    parser.finish()?;

    Ok(args)
}

fn shape_buffer(mut buffer: persianbuzz::UnicodeBuffer, options: &str) -> String {
    let args = options.split(' ').filter(|s| !s.is_empty()).map(std::ffi::OsString::from).collect();
    let args = parse_args(args).unwrap();

    let mut flags = persianbuzz::BufferFlags::default();
    if args.keep_digit_order {
        flags |= persianbuzz::BufferFlags::KEEP_DIGIT_ORDER;
    }

    if args.shape_single_letter {
        flags |= persianbuzz::BufferFlags::SHAPE_SINGLE_LETTER;
    }

    buffer.set_flags(flags);

    let input_len = buffer.len();
    let glyph_buffer = persianbuzz::shape(buffer);
    assert_eq!(glyph_buffer.len(), input_len);

    let mut format_flags = persianbuzz::SerializeFlags::default();
    if args.decimal {
        format_flags |= persianbuzz::SerializeFlags::DECIMAL;
    }

    if args.no_unicode_prefix {
        format_flags |= persianbuzz::SerializeFlags::NO_UNICODE_PREFIX;
    }

    glyph_buffer.serialize(format_flags)
}

pub fn shape(text: &str, options: &str) -> String {
    let mut buffer = persianbuzz::UnicodeBuffer::new();
    buffer.push_str(text);
    shape_buffer(buffer, options)
}

pub fn shape_code_points(code_points: &[u32], options: &str) -> String {
    let mut buffer = persianbuzz::UnicodeBuffer::new();
    buffer.extend_code_points(code_points);
    shape_buffer(buffer, options)
}
