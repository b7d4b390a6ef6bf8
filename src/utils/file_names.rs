/// 将公司名转换为可用作文件名的片段
pub fn safe_file_stem(name: &str) -> String {
    let stem: String = name
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    let stem = stem.trim_matches('.').to_string();
    if stem.is_empty() {
        "company".to_string()
    } else {
        stem
    }
}

#[cfg(test)]
mod tests {
    use super::safe_file_stem;

    #[test]
    fn test_plain_name_is_kept() {
        assert_eq!(safe_file_stem("Acme Corp"), "Acme Corp");
    }

    #[test]
    fn test_reserved_characters_are_replaced() {
        assert_eq!(safe_file_stem("AT&T / Bell: Labs?"), "AT&T _ Bell_ Labs_");
        assert_eq!(safe_file_stem("..\\..\\etc"), "_.._etc");
    }

    #[test]
    fn test_empty_falls_back() {
        assert_eq!(safe_file_stem("   "), "company");
        assert_eq!(safe_file_stem(".."), "company");
    }
}
