//! Generate the lookup table of numeric replies.
//!
//! The table is sorted by code, so it can be used with a binary search.

use crate::Reply;
use std::io::{self, Write};

/// Generate a static array of `(code, mnemonic)` pairs.
///
/// Replies with the same code keep the order from the source file.
pub fn generate_table(mut output: impl Write, name: &str, replies: &[Reply]) -> io::Result<()> {
    let mut sorted: Vec<&Reply> = replies.iter().collect();
    sorted.sort_by_key(|reply| reply.code);

    write!(
        output,
        "static constexpr std::pair<int, const char*> {}[] = {{ ",
        name
    )?;

    for (idx, reply) in sorted.iter().enumerate() {
        if idx > 0 {
            output.write_all(b", ")?;
        }

        write!(output, "{{{}, \"{}\"}}", reply.code, reply.mnemonic)?;
    }

    output.write_all(b" };")?;

    Ok(())
}

#[cfg(test)]
fn render(replies: &[Reply]) -> String {
    let mut output = Vec::new();
    generate_table(&mut output, "valid_replies", replies).unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn empty_table() {
    assert_eq!(
        render(&[]),
        "static constexpr std::pair<int, const char*> valid_replies[] = {  };"
    );
}

#[test]
fn sorted_by_code() {
    let replies = [
        Reply::new(433, "ERR_NICKNAMEINUSE"),
        Reply::new(1, "RPL_WELCOME"),
        Reply::new(5, "RPL_ISUPPORT"),
        Reply::new(1, "RPL_WELCOME_AGAIN"),
    ];

    assert_eq!(
        render(&replies),
        "static constexpr std::pair<int, const char*> valid_replies[] = { \
         {1, \"RPL_WELCOME\"}, {1, \"RPL_WELCOME_AGAIN\"}, \
         {5, \"RPL_ISUPPORT\"}, {433, \"ERR_NICKNAMEINUSE\"} };"
    );

    // The source order is not modified.
    assert_eq!(replies[0].code, 433);
}
