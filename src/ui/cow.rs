use crate::ui::constants::COW;

pub fn append_cow(buffer: &mut String) {
    buffer.push_str(COW);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cow_is_appended_verbatim() {
        let mut buffer = String::from(" --\n");
        append_cow(&mut buffer);
        assert_eq!(buffer, format!(" --\n{}", COW));
        assert!(!buffer.ends_with('\n'));
    }

    #[test]
    fn test_cow_shape() {
        let rows: Vec<&str> = COW.lines().collect();
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0], "    \\   ^__^");
        assert_eq!(rows[2], "        (__)\\       )\\/\\");
        assert_eq!(rows[4], "            ||     ||");
    }
}
