use std::io::Write;

use crate::error::LessResult;

/// A property ready to be written, with its value fully evaluated
pub(crate) type Declaration = (String, String);

/// Where an at-rule's block started, so an empty one can be taken back
#[derive(Debug, Clone, Copy)]
pub(crate) struct BlockMark {
    start: usize,
    body_start: usize,
}

/// Writes style rules one per line, and at-rule bodies indented by two spaces
#[derive(Debug)]
pub(crate) struct Serializer {
    indentation: usize,
    indent_width: usize,
    buffer: Vec<u8>,
}

impl Serializer {
    pub fn new() -> Self {
        Self {
            indentation: 0,
            indent_width: 2,
            buffer: Vec::new(),
        }
    }

    fn write_indentation(&mut self) {
        self.buffer.reserve(self.indentation);
        for _ in 0..self.indentation {
            self.buffer.push(b' ');
        }
    }

    fn write_declarations(&mut self, declarations: &[Declaration]) -> LessResult<()> {
        for (idx, (name, value)) in declarations.iter().enumerate() {
            if idx != 0 {
                self.buffer.push(b' ');
            }
            write!(&mut self.buffer, "{}: {};", name, value)?;
        }

        Ok(())
    }

    /// `a, b { c: d; e: f; }`
    pub fn write_style_rule(
        &mut self,
        selectors: &[String],
        declarations: &[Declaration],
    ) -> LessResult<()> {
        self.write_indentation();
        self.buffer.extend_from_slice(selectors.join(", ").as_bytes());
        self.buffer.extend_from_slice(b" { ");
        self.write_declarations(declarations)?;
        self.buffer.extend_from_slice(b" }\n");

        Ok(())
    }

    /// Declarations directly inside an at-rule, such as `@font-face`, on a
    /// line of their own
    pub fn write_bare_declarations(&mut self, declarations: &[Declaration]) -> LessResult<()> {
        self.write_indentation();
        self.write_declarations(declarations)?;
        self.buffer.push(b'\n');

        Ok(())
    }

    /// `@font-face { a: b; }`
    pub fn write_inline_at_rule(
        &mut self,
        prelude: &str,
        declarations: &[Declaration],
    ) -> LessResult<()> {
        self.write_style_rule(&[prelude.to_owned()], declarations)
    }

    pub fn write_directive(&mut self, text: &str) {
        self.write_indentation();
        self.buffer.extend_from_slice(text.as_bytes());
        self.buffer.extend_from_slice(b";\n");
    }

    /// The contents of an imported `.css` file
    pub fn write_raw_css(&mut self, css: &str) {
        self.buffer.extend_from_slice(css.as_bytes());
        if !css.is_empty() && !css.ends_with('\n') {
            self.buffer.push(b'\n');
        }
    }

    pub fn open_block(&mut self, prelude: &str) -> BlockMark {
        let start = self.buffer.len();
        self.write_indentation();
        self.buffer.extend_from_slice(prelude.as_bytes());
        self.buffer.extend_from_slice(b" {\n");
        self.indentation += self.indent_width;

        BlockMark {
            start,
            body_start: self.buffer.len(),
        }
    }

    /// Close the block opened at `mark`. A block that received no output is
    /// removed entirely.
    pub fn close_block(&mut self, mark: BlockMark) {
        self.indentation -= self.indent_width;

        if self.buffer.len() == mark.body_start {
            self.buffer.truncate(mark.start);
            return;
        }

        self.write_indentation();
        self.buffer.extend_from_slice(b"}\n");
    }

    pub fn finish(self) -> LessResult<String> {
        Ok(String::from_utf8(self.buffer)?)
    }
}

#[cfg(test)]
mod test {
    use super::Serializer;

    fn decl(name: &str, value: &str) -> (String, String) {
        (name.to_owned(), value.to_owned())
    }

    #[test]
    fn rules_are_written_on_one_line() {
        let mut serializer = Serializer::new();
        serializer
            .write_style_rule(
                &[".a".to_owned(), ".b".to_owned()],
                &[decl("color", "red"), decl("margin", "0")],
            )
            .unwrap();
        assert_eq!(
            serializer.finish().unwrap(),
            ".a, .b { color: red; margin: 0; }\n"
        );
    }

    #[test]
    fn blocks_indent_their_contents() {
        let mut serializer = Serializer::new();
        let mark = serializer.open_block("@media print");
        serializer
            .write_style_rule(&["a".to_owned()], &[decl("b", "c")])
            .unwrap();
        serializer.close_block(mark);
        assert_eq!(
            serializer.finish().unwrap(),
            "@media print {\n  a { b: c; }\n}\n"
        );
    }

    #[test]
    fn empty_blocks_are_dropped() {
        let mut serializer = Serializer::new();
        serializer.write_directive("@charset \"UTF-8\"");
        let mark = serializer.open_block("@media print");
        serializer.close_block(mark);
        assert_eq!(serializer.finish().unwrap(), "@charset \"UTF-8\";\n");
    }
}
