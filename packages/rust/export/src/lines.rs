//! Answer body line classification.

/// How an answer line is laid out in a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// List item; the leading marker has been stripped.
    Bullet,
    /// Plain paragraph.
    Normal,
}

/// One non-empty line of an answer body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerLine {
    pub kind: LineKind,
    pub text: String,
}

impl AnswerLine {
    fn bullet(text: &str) -> Self {
        Self {
            kind: LineKind::Bullet,
            text: text.trim().to_string(),
        }
    }

    fn normal(text: &str) -> Self {
        Self {
            kind: LineKind::Normal,
            text: text.to_string(),
        }
    }
}

/// Split `answer` into trimmed, non-empty lines and mark bullets.
///
/// A line is a bullet when it starts with `•` or with `"- "`; the marker is
/// removed. Blank lines are dropped rather than emitted as empty paragraphs.
pub fn classify_answer_lines(answer: &str) -> Vec<AnswerLine> {
    answer
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            if let Some(rest) = line.strip_prefix('•') {
                AnswerLine::bullet(rest)
            } else if let Some(rest) = line.strip_prefix("- ") {
                AnswerLine::bullet(rest)
            } else {
                AnswerLine::normal(line)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(lines: &[AnswerLine]) -> Vec<(LineKind, &str)> {
        lines.iter().map(|l| (l.kind, l.text.as_str())).collect()
    }

    #[test]
    fn detects_both_bullet_markers() {
        let lines = classify_answer_lines("• First\n- Second\nThird");
        assert_eq!(
            kinds(&lines),
            [
                (LineKind::Bullet, "First"),
                (LineKind::Bullet, "Second"),
                (LineKind::Normal, "Third"),
            ]
        );
    }

    #[test]
    fn drops_blank_lines() {
        let lines = classify_answer_lines("A\n\nB");
        assert_eq!(lines.len(), 2);
        assert_eq!(classify_answer_lines("  \n \t \n").len(), 0);
        assert!(classify_answer_lines("").is_empty());
    }

    #[test]
    fn hyphen_needs_following_space() {
        let lines = classify_answer_lines("-5% margin\n-\n-  padded");
        assert_eq!(
            kinds(&lines),
            [
                (LineKind::Normal, "-5% margin"),
                (LineKind::Normal, "-"),
                (LineKind::Bullet, "padded"),
            ]
        );
    }

    #[test]
    fn lines_are_trimmed() {
        let lines = classify_answer_lines("   •   Indented bullet  \n\tPlain text\t");
        assert_eq!(
            kinds(&lines),
            [
                (LineKind::Bullet, "Indented bullet"),
                (LineKind::Normal, "Plain text"),
            ]
        );
    }

    #[test]
    fn bare_glyph_is_empty_bullet() {
        let lines = classify_answer_lines("•");
        assert_eq!(kinds(&lines), [(LineKind::Bullet, "")]);
    }
}
