// Output rendering.

use std::fmt::Write;

use polseq_reliability::ReliabilitySequence;

/// The sequence as a C array definition, every element followed by `, `.
pub fn render_c_array(sequence: &ReliabilitySequence) -> String {
    let mut out = format!("static const int sequence[{}] = {{ ", sequence.len());
    for position in sequence {
        // Writing to a String cannot fail.
        let _ = write!(out, "{position}, ");
    }
    out.push_str("};");
    out
}
