/*!
# Source Lines

Line buffer for offset-based text surgery. Lines keep their `\n`
terminators so that joining them reproduces the file byte for byte.
*/

/// A file's content split into lines
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceLines {
    lines: Vec<String>,
}

impl SourceLines {
    pub fn from_text(text: &str) -> Self {
        Self {
            lines: text.split_inclusive('\n').map(str::to_string).collect(),
        }
    }

    /// Join the lines, ending the text with exactly the newline it already
    /// has or a single added one
    pub fn to_text(&self) -> String {
        let mut text = self.lines.concat();
        if !text.ends_with('\n') {
            text.push('\n');
        }
        text
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    /// Index of the first line containing `needle`
    pub fn find_first(&self, needle: &str) -> Option<usize> {
        self.lines.iter().position(|line| line.contains(needle))
    }

    /// Index of the last line containing `needle`
    pub fn find_last(&self, needle: &str) -> Option<usize> {
        self.lines.iter().rposition(|line| line.contains(needle))
    }

    /// Insert lines so the first of them lands at `index`.
    ///
    /// Inserted lines without a terminator get one. If the line before the
    /// insertion point has no terminator it gets one too, so the new lines
    /// never merge into it.
    pub fn insert_at<I, S>(&mut self, index: usize, new_lines: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let index = index.min(self.lines.len());
        if let Some(previous) = index.checked_sub(1).and_then(|i| self.lines.get_mut(i)) {
            if !previous.ends_with('\n') {
                previous.push('\n');
            }
        }

        let new_lines: Vec<String> = new_lines
            .into_iter()
            .map(|line| {
                let mut line = line.into();
                if !line.ends_with('\n') {
                    line.push('\n');
                }
                line
            })
            .collect();

        self.lines.splice(index..index, new_lines);
    }

    pub fn insert_after<I, S>(&mut self, index: usize, new_lines: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.insert_at(index + 1, new_lines);
    }

    pub fn insert_before<I, S>(&mut self, index: usize, new_lines: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.insert_at(index, new_lines);
    }

    /// Replace every occurrence of `from` within the line at `index`.
    /// Returns whether the line changed.
    pub fn replace_in_line(&mut self, index: usize, from: &str, to: &str) -> bool {
        match self.lines.get_mut(index) {
            Some(line) if line.contains(from) => {
                *line = line.replace(from, to);
                true
            }
            _ => false,
        }
    }
}
