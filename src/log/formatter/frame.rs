/// 顶部边框
pub const TOP_BORDER: &str = "╔═══════════════════════════════════════════════════════════════════════════════════════════════════";

/// 左边框
pub const LEFT_BORDER: &str = "║ ";

/// 底部边框
pub const BOTTOM_BORDER: &str = "╚═══════════════════════════════════════════════════════════════════════════════════════════════════";

/// 拼接日志头和正文，并按需给每一行加左边框
///
/// 加边框时每行以换行结尾；不加边框时原样拼接。
pub fn frame(head: &str, body: &str, show_border: bool) -> String {
    let mut msg = String::with_capacity(head.len() + body.len() + 1);
    if !head.is_empty() {
        msg.push_str(head);
        msg.push('\n');
    }
    msg.push_str(body);

    if !show_border {
        return msg;
    }

    let mut framed = String::with_capacity(msg.len() + 16 * LEFT_BORDER.len());
    if msg.is_empty() {
        framed.push_str(LEFT_BORDER);
        framed.push('\n');
        return framed;
    }
    for line in msg.lines() {
        framed.push_str(LEFT_BORDER);
        framed.push_str(line);
        framed.push('\n');
    }
    framed
}

#[cfg(test)]
mod tests {
    use super::*;

    const BORDER_WIDTH: usize = 100;

    #[test]
    fn test_border_width() {
        assert_eq!(TOP_BORDER.chars().count(), BORDER_WIDTH);
        assert_eq!(BOTTOM_BORDER.chars().count(), BORDER_WIDTH);
    }

    #[test]
    fn test_frame_without_border() {
        assert_eq!(frame("", "hello", false), "hello");
        assert_eq!(frame("Thread: main, run(a.rs:1)", "hello", false), "Thread: main, run(a.rs:1)\nhello");
    }

    #[test]
    fn test_frame_with_border() {
        let framed = frame("head", "line1\nline2", true);
        assert_eq!(framed, "║ head\n║ line1\n║ line2\n");
    }

    #[test]
    fn test_frame_every_line_prefixed() {
        let framed = frame("", "a\n\nb", true);
        assert!(framed.lines().all(|line| line.starts_with(LEFT_BORDER)));
        assert_eq!(framed.lines().count(), 3);
    }

    #[test]
    fn test_frame_empty_body_with_border() {
        assert_eq!(frame("", "", true), "║ \n");
    }
}
