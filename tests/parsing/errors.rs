#[cfg(test)]
mod syntax {
    use std::path::Path;

    use slugline::language::*;
    use slugline::parsing;

    #[test]
    fn undecodable_input_is_rejected() {
        let content = b"BOB\nHello\xc3\x28 there";

        let result = parsing::parse_bytes(content, &Options { tokens: true });
        assert_eq!(result, Err(ParsingError::InvalidInput { offset: 9 }));
    }

    #[test]
    fn decodable_input_parses() {
        let content = "BOB\nHello there".as_bytes();

        let result = parsing::parse_bytes(content, &Options::default()).unwrap();
        assert_eq!(result, parsing::parse("BOB\nHello there", &Options::default()));
    }

    #[test]
    fn weird_input_never_fails() {
        for content in [
            "^",
            "^\n^",
            "[[",
            "]]",
            "/*",
            "*/\n\n/*",
            "***",
            "_",
            "#",
            "=",
            ">",
            "<",
            "> <",
            ".",
            "\t\t\t",
            "   \n   \n",
            "\r\r\r",
            "Title:",
            "INT.",
            "A\n\n\n\n\nB",
        ] {
            let result = parsing::parse_bytes(content.as_bytes(), &Options { tokens: true });
            assert!(result.is_ok(), "{:?}", content);
        }
    }

    #[test]
    fn missing_file() {
        let result = parsing::load(Path::new("tests/samples/does_not_exist.fountain"));

        match result {
            Err(error) => assert_eq!(error.problem, "File not found"),
            Ok(_) => panic!("Expected loading a missing file to fail"),
        }
    }
}
