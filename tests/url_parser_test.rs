//! Tests for share link parsing.

use ctfile::url_parser::parse_share_link;

mod share_urls {
    use super::*;

    #[test]
    fn d_link() {
        let share = parse_share_link("https://url57.ctfile.com/d/31221328-53258795-86a5b4").unwrap();
        assert_eq!(share.share_id, "31221328-53258795-86a5b4");
        assert_eq!(share.folder_id, "");
    }

    #[test]
    fn dir_link() {
        let share = parse_share_link("https://545c.com/dir/14804066-35452035-b6b7b4").unwrap();
        assert_eq!(share.share_id, "14804066-35452035-b6b7b4");
    }

    #[test]
    fn http_link() {
        let share = parse_share_link("http://545c.com/d/1-2-a").unwrap();
        assert_eq!(share.share_id, "1-2-a");
    }

    #[test]
    fn link_with_password_param() {
        let share = parse_share_link("https://url57.ctfile.com/d/1-2-a?p=6688").unwrap();
        assert_eq!(share.share_id, "1-2-a");
        assert_eq!(share.folder_id, "");
    }

    #[test]
    fn link_with_folder_param() {
        let share = parse_share_link("https://545c.com/dir/1-2-a?p=6688&folder_id=777").unwrap();
        assert_eq!(share.share_id, "1-2-a");
        assert_eq!(share.folder_id, "777");
    }

    #[test]
    fn non_numeric_folder_param_ignored() {
        let share = parse_share_link("https://545c.com/dir/1-2-a?folder_id=abc").unwrap();
        assert_eq!(share.folder_id, "");
    }
}

mod raw_ids {
    use super::*;

    #[test]
    fn hyphenated_id() {
        assert_eq!(parse_share_link("1-2-a").unwrap().share_id, "1-2-a");
    }

    #[test]
    fn whitespace_trimmed() {
        assert_eq!(parse_share_link("\t1-2-a\n").unwrap().share_id, "1-2-a");
    }
}

mod invalid_inputs {
    use super::*;

    #[test]
    fn empty_string() {
        assert!(parse_share_link("").is_err());
        assert!(parse_share_link("   ").is_err());
    }

    #[test]
    fn wrong_path() {
        assert!(parse_share_link("https://545c.com/file/1-2-a").is_err());
        assert!(parse_share_link("https://545c.com/").is_err());
    }

    #[test]
    fn invalid_characters() {
        assert!(parse_share_link("abc 123").is_err());
        assert!(parse_share_link("abc_123").is_err());
        assert!(parse_share_link("abc@123").is_err());
    }
}
