//! Nesting depth scan for untrusted JSON text
//!
//! Runs before JSON decoding so the decoder never recurses deeper than the
//! configured bound. The scan is iterative and does not validate syntax;
//! malformed input is left for the decoder to reject.

/// Return the deepest container nesting found in `input`, stopping early
/// once `max` is exceeded
pub(crate) fn max_nesting(input: &[u8], max: usize) -> usize {
    let mut depth = 0usize;
    let mut deepest = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for &byte in input {
        if in_string {
            if escaped {
                escaped = false;
            } else if byte == b'\\' {
                escaped = true;
            } else if byte == b'"' {
                in_string = false;
            }
            continue;
        }

        match byte {
            b'"' => in_string = true,
            b'{' | b'[' => {
                depth += 1;
                if depth > deepest {
                    deepest = depth;
                    if deepest > max {
                        break;
                    }
                }
            }
            b'}' | b']' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }

    deepest
}
