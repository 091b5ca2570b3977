use crate::{BufferFlags, CodePoint};
use crate::unicode::is_decimal_digit;
use super::joining::classify;
use super::persian_table;

/// Statistics of a single shaping pass.
#[derive(Clone, Copy, Default, Debug)]
pub(crate) struct ShapeStats {
    pub letters: usize,
    pub digit_runs: usize,
}

/// Shapes `input` and appends the result to `output`.
///
/// Every input code point produces exactly one output code point.
/// Letters are replaced by their presentation forms and digit runs are
/// reversed in place, so that they read left-to-right inside
/// right-to-left text.
pub(crate) fn shape_into(
    input: &[CodePoint],
    flags: BufferFlags,
    output: &mut Vec<CodePoint>,
) -> ShapeStats {
    let mut stats = ShapeStats::default();

    // A single character is never shaped, not even a letter.
    if input.len() <= 1 && !flags.contains(BufferFlags::SHAPE_SINGLE_LETTER) {
        output.extend_from_slice(input);
        return stats;
    }

    let reverse_digits = !flags.contains(BufferFlags::KEEP_DIGIT_ORDER);
    output.reserve(input.len());

    // Output position of the first digit of the current run.
    let mut run_start = None;

    for (i, &u) in input.iter().enumerate() {
        if is_decimal_digit(u) {
            if run_start.is_none() {
                run_start = Some(output.len());
            }

            output.push(u);
            continue;
        }

        if let Some(start) = run_start.take() {
            finish_digit_run(&mut output[start..], reverse_digits);
            stats.digit_runs += 1;
        }

        match persian_table::lookup(u) {
            Some(entry) => {
                let prev = if i > 0 { Some(input[i - 1]) } else { None };
                let next = input.get(i + 1).copied();
                output.push(entry.form(classify(prev, next)));
                stats.letters += 1;
            }
            None => output.push(u),
        }
    }

    if let Some(start) = run_start {
        finish_digit_run(&mut output[start..], reverse_digits);
        stats.digit_runs += 1;
    }

    stats
}

// Digits were appended in logical order; flipping the run gives the same
// result as inserting each digit at the start of the run.
#[inline]
fn finish_digit_run(run: &mut [CodePoint], reverse: bool) {
    if reverse {
        run.reverse();
    }
}
