#[cfg(test)]
mod verify {
    use std::cell::Cell;

    use slugline::language::*;
    use slugline::parsing::{self, lexer, parser};

    fn trim(s: &str) -> &str {
        s.strip_prefix('\n')
            .unwrap_or(s)
    }

    fn tokenize(content: &str) -> Vec<Token> {
        parsing::parse(content, &Options { tokens: true })
            .tokens
            .unwrap()
    }

    fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
        tokens
            .iter()
            .map(|token| token.kind)
            .collect()
    }

    #[test]
    fn empty_input() {
        let result = parsing::parse("", &Options { tokens: true });
        assert_eq!(result.title, None);
        assert_eq!(result.title_page, "");
        assert_eq!(result.body, "");
        assert_eq!(result.tokens, Some(vec![]));
    }

    #[test]
    fn tokens_only_on_request() {
        let result = parsing::parse("He leaves.", &Options::default());
        assert_eq!(result.tokens, None);
        assert_eq!(result.body, "<p>He leaves.</p>");
    }

    #[test]
    fn completion_called_once() {
        let calls = Cell::new(0);

        parsing::parse_then("Title: Hamlet", &Options::default(), |result| {
            calls.set(calls.get() + 1);
            assert_eq!(result.title, Some("Hamlet".to_string()));
        });

        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn title_extraction() {
        let result = parsing::parse("Title: Hamlet", &Options::default());
        assert_eq!(result.title, Some("Hamlet".to_string()));

        let result = parsing::parse(
            trim(
                r#"
Title: Hamlet
Author: W. Shakespeare

EXT. ELSINORE - NIGHT

A cold wind.
            "#,
            ),
            &Options::default(),
        );
        assert_eq!(result.title, Some("Hamlet".to_string()));

        let result = parsing::parse("A play with no title.", &Options::default());
        assert_eq!(result.title, None);
    }

    #[test]
    fn title_markup_is_stripped() {
        let result = parsing::parse("Title: **Big** _Fish_", &Options::default());
        assert_eq!(result.title, Some("Big Fish".to_string()));

        let result = parsing::parse(
            "Title:\n\t_**BRICK & STEEL**_\n\t_**FULL RETIRED**_",
            &Options::default(),
        );
        assert_eq!(
            result.title,
            Some("BRICK & STEEL FULL RETIRED".to_string())
        );
    }

    #[test]
    fn document_order() {
        let tokens = tokenize(trim(
            r#"
Title: Big Fish
Credit: written by
Author: John August

INT. HOUSE - DAY #1#

Bob enters.

BOB
(quietly)
Hello?

CUT TO:
            "#,
        ));

        assert_eq!(
            kinds(&tokens),
            vec![
                TokenKind::Title,
                TokenKind::Credit,
                TokenKind::Author,
                TokenKind::SceneHeading,
                TokenKind::Action,
                TokenKind::DialogueBegin,
                TokenKind::Character,
                TokenKind::Parenthetical,
                TokenKind::Dialogue,
                TokenKind::DialogueEnd,
                TokenKind::Transition,
            ]
        );
        assert_eq!(tokens[3].text(), Some("INT. HOUSE - DAY"));
        assert_eq!(tokens[3].scene_number, Some("1".to_string()));
        assert_eq!(tokens[6].text(), Some("BOB"));
    }

    #[test]
    fn scene_number() {
        let tokens = tokenize("INT. HOUSE - DAY #102#");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::SceneHeading);
        assert_eq!(tokens[0].text(), Some("INT. HOUSE - DAY"));
        assert_eq!(tokens[0].scene_number, Some("102".to_string()));
    }

    #[test]
    fn heading_wins_over_dialogue() {
        let tokens = tokenize("INT. HOUSE - DAY\nBOB");
        assert_eq!(kinds(&tokens), vec![TokenKind::SceneHeading]);
    }

    #[test]
    fn dual_dialogue_pairing() {
        let tokens = tokenize("ALICE\nHi.\n\nBOB^\nHi back.");

        let summary: Vec<(TokenKind, Option<&str>, Option<Dual>)> = tokens
            .iter()
            .map(|token| (token.kind, token.text(), token.dual))
            .collect();

        assert_eq!(
            summary,
            vec![
                (TokenKind::DualDialogueBegin, None, None),
                (TokenKind::DialogueBegin, None, Some(Dual::Left)),
                (TokenKind::Character, Some("ALICE"), None),
                (TokenKind::Dialogue, Some("Hi."), None),
                (TokenKind::DialogueEnd, None, None),
                (TokenKind::DialogueBegin, None, Some(Dual::Right)),
                (TokenKind::Character, Some("BOB"), None),
                (TokenKind::Dialogue, Some("Hi back."), None),
                (TokenKind::DialogueEnd, None, None),
                (TokenKind::DualDialogueEnd, None, None),
            ]
        );
    }

    #[test]
    fn dialogue_after_a_pair_is_single() {
        let tokens = tokenize("ALICE\nHi.\n\nBOB^\nHi back.\n\nCAROL\nAnd me.");

        let carol = tokens
            .iter()
            .position(|token| token.text() == Some("CAROL"))
            .unwrap();
        assert_eq!(tokens[carol - 1].kind, TokenKind::DialogueBegin);
        assert_eq!(tokens[carol - 1].dual, None);
        assert_eq!(tokens[carol - 2].kind, TokenKind::DualDialogueEnd);
    }

    #[test]
    fn balanced_containers() {
        let tokens = tokenize(trim(
            r#"
BOB^
Orphaned.

ALICE
One.

BOB
Two.

CAROL^
Three.

DAVE^
Four.
            "#,
        ));

        let count = |kind: TokenKind| {
            tokens
                .iter()
                .filter(|token| token.kind == kind)
                .count()
        };

        assert_eq!(count(TokenKind::DialogueBegin), 5);
        assert_eq!(
            count(TokenKind::DialogueBegin),
            count(TokenKind::DialogueEnd)
        );
        assert_eq!(
            count(TokenKind::DualDialogueBegin),
            count(TokenKind::DualDialogueEnd)
        );
    }

    #[test]
    fn two_trailing_spaces_force_action() {
        // Ending a heading or cue in exactly two spaces turns it back into
        // action.
        let tokens = tokenize("EXT. BEACH - DAY  ");
        assert_eq!(kinds(&tokens), vec![TokenKind::Action]);

        let tokens = tokenize("BOB  \nHello.");
        assert_eq!(kinds(&tokens), vec![TokenKind::Action]);

        let tokens = tokenize("INT.  HOUSE - DAY  ");
        assert_eq!(kinds(&tokens), vec![TokenKind::Action]);

        let tokens = tokenize("BOB  SMITH  \nHello.");
        assert_eq!(kinds(&tokens), vec![TokenKind::Action]);

        // three is not two
        let tokens = tokenize("EXT. BEACH - DAY   ");
        assert_eq!(kinds(&tokens), vec![TokenKind::SceneHeading]);
    }

    #[test]
    fn emphasis_precedence() {
        let tokens = tokenize("***bold italic***");
        assert_eq!(
            tokens[0].text(),
            Some(r#"<span class="bold italic">bold italic</span>"#)
        );
    }

    #[test]
    fn stages_compose() {
        let content = "EXT. PARK - DAY\n\nBOB\nHi.";

        let blocks = lexer::preprocess(content);
        let backwards = parser::classify(&blocks);
        assert_eq!(backwards[0].kind, TokenKind::DialogueEnd);

        let forwards = parser::into_document_order(backwards);
        assert_eq!(forwards[0].kind, TokenKind::SceneHeading);
    }

    #[test]
    fn serialized_tokens() {
        let tokens = tokenize("INT. HOUSE - DAY #7#\n\n## Act Two");
        let json = serde_json::to_value(&tokens).unwrap();

        assert_eq!(json[0]["type"], "scene_heading");
        assert_eq!(json[0]["sceneNumber"], "7");
        assert_eq!(json[1]["type"], "section");
        assert_eq!(json[1]["depth"], 2);
        assert_eq!(json[1]["text"], "Act Two");
    }
}
