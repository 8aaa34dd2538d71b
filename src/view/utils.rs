//! Visual width helpers for column alignment

/// Display width of a string, skipping ANSI color sequences
pub fn visual_width(s: &str) -> usize {
    let mut width = 0;
    let mut chars = s.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\x1b' {
            if chars.peek() == Some(&'[') {
                chars.next();
                for c in chars.by_ref() {
                    if c.is_ascii_alphabetic() {
                        break;
                    }
                }
            }
        } else {
            width += char_width(ch);
        }
    }

    width
}

/// Terminal cell width of a single character
pub fn char_width(ch: char) -> usize {
    match ch {
        '\u{0000}'..='\u{001F}' | '\u{007F}' => 0,
        // Combining marks
        '\u{0300}'..='\u{036F}' => 0,
        // Symbols, dingbats and the emoji blocks
        '\u{2600}'..='\u{26FF}'
        | '\u{2700}'..='\u{27BF}'
        | '\u{1F000}'..='\u{1F02F}'
        | '\u{1F030}'..='\u{1F09F}'
        | '\u{1F0A0}'..='\u{1F0FF}'
        | '\u{1F100}'..='\u{1F1FF}'
        | '\u{1F200}'..='\u{1F2FF}'
        | '\u{1F300}'..='\u{1F5FF}'
        | '\u{1F600}'..='\u{1F64F}'
        | '\u{1F650}'..='\u{1F67F}'
        | '\u{1F680}'..='\u{1F6FF}'
        | '\u{1F700}'..='\u{1F77F}'
        | '\u{1F780}'..='\u{1F7FF}'
        | '\u{1F800}'..='\u{1F8FF}'
        | '\u{1F900}'..='\u{1F9FF}' => 2,
        // Hangul, CJK, kana, Yi and full-width forms; unassigned gaps stay narrow
        '\u{1100}'..='\u{115F}'
        | '\u{2E80}'..='\u{2EFF}'
        | '\u{2F00}'..='\u{2FDF}'
        | '\u{2FF0}'..='\u{2FFF}'
        | '\u{3000}'..='\u{303E}'
        | '\u{3041}'..='\u{3096}'
        | '\u{30A1}'..='\u{30FA}'
        | '\u{3105}'..='\u{312D}'
        | '\u{3131}'..='\u{318E}'
        | '\u{3190}'..='\u{31BA}'
        | '\u{31C0}'..='\u{31E3}'
        | '\u{31F0}'..='\u{31FF}'
        | '\u{3200}'..='\u{32FF}'
        | '\u{3300}'..='\u{33FF}'
        | '\u{3400}'..='\u{4DBF}'
        | '\u{4E00}'..='\u{9FFF}'
        | '\u{A000}'..='\u{A48C}'
        | '\u{A490}'..='\u{A4C6}'
        | '\u{AC00}'..='\u{D7AF}'
        | '\u{F900}'..='\u{FAFF}'
        | '\u{FE10}'..='\u{FE19}'
        | '\u{FE30}'..='\u{FE6F}'
        | '\u{FF00}'..='\u{FF60}'
        | '\u{FFE0}'..='\u{FFE6}' => 2,
        _ => 1,
    }
}
