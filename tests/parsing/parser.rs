#[cfg(test)]
mod verify {
    use consent::document::*;
    use consent::parsing;

    fn trim(s: &str) -> &str {
        s.strip_prefix('\n')
            .unwrap_or(s)
    }

    fn markdown(text: &str) -> Section {
        Section::Markdown {
            text: text.to_string(),
        }
    }

    fn signature(id: &str) -> Section {
        Section::Signature { id: id.to_string() }
    }

    fn option(id: &str, title: &str) -> SelectionOption {
        SelectionOption {
            id: id.to_string(),
            title: title.to_string(),
        }
    }

    fn select_section(source: &str) -> SelectSection {
        let result = parsing::parse(source).unwrap();
        match result
            .sections
            .into_iter()
            .next()
        {
            Some(Section::Select(select)) => select,
            other => panic!("Expected a select section, got {:?}", other),
        }
    }

    #[test]
    fn no_frontmatter() {
        let source = "# Consent to treatment\n\nPlease read the following carefully.";

        let result = parsing::parse(source).unwrap();

        assert_eq!(result.frontmatter, Frontmatter::new());
        assert_eq!(result.sections, vec![markdown(source)]);
    }

    #[test]
    fn frontmatter() {
        let result = parsing::parse(
            "---\ntitle: abc\nversion: 1.0.2\nkeyOnlyEntry: \nkeyAndValueEntry: value\n---\n\nbody text\n",
        )
        .unwrap();

        let mut expected = Frontmatter::new();
        expected.insert("title".to_string(), "abc".to_string());
        expected.insert("version".to_string(), "1.0.2".to_string());
        expected.insert("keyOnlyEntry".to_string(), "".to_string());
        expected.insert("keyAndValueEntry".to_string(), "value".to_string());

        assert_eq!(result.frontmatter, expected);
        assert_eq!(result.title(), Some("abc"));
        assert_eq!(result.sections, vec![markdown("body text")]);
    }

    #[test]
    fn frontmatter_only() {
        let result = parsing::parse("---\ntitle: Empty\n---\n").unwrap();

        assert_eq!(result.frontmatter["title"], "Empty");
        assert_eq!(result.sections, vec![]);
    }

    #[test]
    fn mixed_content() {
        let result = parsing::parse(trim(
            r#"
# Consent

Introductory text.

<toggle id=t1 initial-value=true expected-value=true>Do you agree?</toggle>

Some more text,
over two lines.
<select id=s1 expected-value=o2>
Please select
<option id=o1>First</option>
<option id=o2>Second</option>
your preference.
</select>
<signature id=sig />

Closing remarks.
"#,
        ))
        .unwrap();

        assert_eq!(
            result.sections,
            vec![
                markdown("# Consent\n\nIntroductory text."),
                Section::Toggle(ToggleSection {
                    id: "t1".to_string(),
                    prompt: "Do you agree?".to_string(),
                    initial_value: true,
                    expected_value: Some(true),
                }),
                markdown("Some more text,\nover two lines."),
                Section::Select(SelectSection {
                    id: "s1".to_string(),
                    prompt: "Please select\n\nyour preference.".to_string(),
                    options: vec![option("o1", "First"), option("o2", "Second")],
                    initial_value: None,
                    expected_value: ExpectedSelection::Option(option("o2", "Second")),
                }),
                signature("sig"),
                markdown("Closing remarks."),
            ]
        );
    }

    #[test]
    fn closing_tag_forms() {
        let expected = vec![signature("sig")];

        for source in [
            "<signature id=sig></signature>",
            "<signature id=sig></>",
            "<signature id=sig />",
        ] {
            let result = parsing::parse(source).unwrap();
            assert_eq!(result.sections, expected, "{}", source);
        }
    }

    #[test]
    fn select_expected_values() {
        let options = "Pick one\n<option id=o1>One</option>\n<option id=o2>Two</option>\n</select>";

        let select = select_section(&format!("<select id=s>{}", options));
        assert_eq!(select.expected_value, ExpectedSelection::Anything);

        let select = select_section(&format!("<select id=s expected-value=\"*\">{}", options));
        assert_eq!(select.expected_value, ExpectedSelection::AnythingExceptEmpty);

        let select = select_section(&format!("<select id=s expected-value=o1>{}", options));
        assert_eq!(
            select.expected_value,
            ExpectedSelection::Option(option("o1", "One"))
        );

        let select = select_section(&format!("<select id=s initial-value=o2>{}", options));
        assert_eq!(select.initial_value, Some(option("o2", "Two")));
    }

    #[test]
    fn attribute_spellings() {
        let result = parsing::parse(
            "<toggle id=a initialValue=true expectedValue=false>Prompt</toggle>",
        )
        .unwrap();

        assert_eq!(
            result.sections,
            vec![Section::Toggle(ToggleSection {
                id: "a".to_string(),
                prompt: "Prompt".to_string(),
                initial_value: true,
                expected_value: Some(false),
            })]
        );
    }

    #[test]
    fn quoted_and_numeric_values() {
        let result = parsing::parse(
            "<signature id=\"patient \\\"primary\\\" signature\" />\n<signature id=42 />",
        )
        .unwrap();

        assert_eq!(
            result.sections,
            vec![signature("patient \"primary\" signature"), signature("42")]
        );
    }

    #[test]
    fn unicode_content() {
        let result = parsing::parse("Zustimmung für die Behandlung 👍\n<toggle id=ja>Ich stimme zu</toggle>").unwrap();

        assert_eq!(
            result.sections[0],
            markdown("Zustimmung für die Behandlung 👍")
        );
        assert_eq!(result.sections[1].id(), Some("ja"));
    }

    #[test]
    fn duplicate_ids_are_reported_not_rejected() {
        let result = parsing::parse("<signature id=a />\n<signature id=a />").unwrap();

        assert_eq!(result.sections.len(), 2);
        assert_eq!(result.duplicate_ids(), vec!["a"]);
    }

    #[test]
    fn deterministic() {
        let source = trim(
            r#"
---
title: Repeat
---
Text
<toggle id=t>Agree?</toggle>
"#,
        );

        assert_eq!(parsing::parse(source), parsing::parse(source));
    }

    #[test]
    fn serializing() {
        let result = parsing::parse(
            "---\ntitle: T\n---\nIntro\n<select id=s expected-value=\"*\">Pick\n<option id=a>A</option>\n</select>",
        )
        .unwrap();

        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["frontmatter"]["title"], "T");
        assert_eq!(json["sections"][0]["kind"], "markdown");
        assert_eq!(json["sections"][0]["text"], "Intro");
        assert_eq!(json["sections"][1]["kind"], "select");
        assert_eq!(json["sections"][1]["options"][0]["title"], "A");
        assert_eq!(
            json["sections"][1]["expected_value"]["kind"],
            "anything-except-empty"
        );
    }
}
