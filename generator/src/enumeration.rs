//! Generate the enumeration of numeric replies.
//!
//! Entries are written in the same order as the source file. The example
//! and the description are added as documentation comments.

use crate::Reply;
use std::io::{self, Write};

const TAB: &str = "    ";

/// Generate the enumeration declaration.
pub fn generate_enum(mut output: impl Write, name: &str, replies: &[Reply]) -> io::Result<()> {
    write!(output, "enum class {} : int {{\n\n", name)?;

    for reply in replies {
        if let Some(example) = &reply.example {
            writeln!(output, "{}/// example: {}", TAB, example)?;
        }

        if let Some(description) = &reply.description {
            writeln!(output, "{}/// description:", TAB)?;
            for line in description.split('\n') {
                writeln!(output, "{}///  {}", TAB, line)?;
            }
        }

        write!(output, "{}{} = {},\n\n", TAB, reply.mnemonic, reply.code)?;
    }

    output.write_all(b"};")?;

    Ok(())
}

#[cfg(test)]
fn render(replies: &[Reply]) -> String {
    let mut output = Vec::new();
    generate_enum(&mut output, "numeric_reply", replies).unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn empty_enumeration() {
    assert_eq!(render(&[]), "enum class numeric_reply : int {\n\n};");
}

#[test]
fn documented_entries() {
    let mut welcome = Reply::new(1, "RPL_WELCOME");
    welcome.example = Some(":server 001 nick :Welcome".into());
    welcome.description = Some("Sent on connect.\nSecond line".into());

    let mut host = Reply::new(2, "RPL_YOURHOST");
    host.description = Some(String::new());

    let replies = [welcome, host, Reply::new(433, "ERR_NICKNAMEINUSE")];

    assert_eq!(
        render(&replies),
        "enum class numeric_reply : int {\n\n\
         \x20   /// example: :server 001 nick :Welcome\n\
         \x20   /// description:\n\
         \x20   ///  Sent on connect.\n\
         \x20   ///  Second line\n\
         \x20   RPL_WELCOME = 1,\n\n\
         \x20   /// description:\n\
         \x20   ///  \n\
         \x20   RPL_YOURHOST = 2,\n\n\
         \x20   ERR_NICKNAMEINUSE = 433,\n\n\
         };"
    );
}

#[test]
fn input_order() {
    let replies = [Reply::new(5, "B"), Reply::new(1, "A")];
    assert_eq!(
        render(&replies),
        "enum class numeric_reply : int {\n\n    B = 5,\n\n    A = 1,\n\n};"
    );
}
