use cypress_test_helpers::commands::{
    toggle_only, toggle_times, Outcome, BLOCK_END_NOTICE, NOT_FOUND_NOTICE, WRAPPER_END_NOTICE,
};
use cypress_test_helpers::host::BufferHost;

// Helper to build a document from inline text
fn doc(text: &str) -> Vec<String> {
    text.lines().map(str::to_string).collect()
}

#[cfg(test)]
mod classifier_tests {
    use super::*;
    use cypress_test_helpers::parser::{classify_declaration, classify_wrapper};

    #[test]
    fn test_declaration_shapes() {
        let decl = classify_declaration("  it('does x', () => {").expect("should match it");
        assert_eq!(decl.indent, "  ");
        assert_eq!(decl.keyword, "it");
        assert!(!decl.only, "plain declaration has no modifier");

        let decl = classify_declaration("\tdescribe.only('suite', () => {")
            .expect("should match describe.only");
        assert_eq!(decl.indent, "\t");
        assert_eq!(decl.keyword, "describe");
        assert!(decl.only, "modifier should be detected");

        let decl = classify_declaration("context('ctx', function () {").expect("should match context");
        assert_eq!(decl.keyword, "context");
    }

    #[test]
    fn test_declaration_rejects() {
        assert!(
            classify_declaration("items('x', () => {").is_none(),
            "keyword must not match inside a longer identifier"
        );
        assert!(
            classify_declaration("it ('x', () => {").is_none(),
            "whitespace before the call paren is not a declaration"
        );
        assert!(
            classify_declaration("it.skip('x', () => {").is_none(),
            "only the .only modifier is recognized"
        );
        assert!(
            classify_declaration("// it('x', () => {").is_none(),
            "commented-out declarations do not match"
        );
        assert!(classify_declaration("cy.visit('/');").is_none());
    }

    #[test]
    fn test_wrapper_shapes() {
        let w = classify_wrapper("Cypress._.times(5, () => {").expect("canonical wrapper");
        assert_eq!(w.indent, "");
        assert_eq!(w.count, 5);

        let w = classify_wrapper("\t\tCypress._.times( 12 ,  ()  =>  {  ")
            .expect("flexible inner whitespace");
        assert_eq!(w.indent, "\t\t");
        assert_eq!(w.count, 12);
    }

    #[test]
    fn test_wrapper_rejects() {
        assert!(
            classify_wrapper("Cypress._.times(5, () => { foo();").is_none(),
            "trailing content after the block opener invalidates the match"
        );
        assert!(
            classify_wrapper("Cypress._.times(n, () => {").is_none(),
            "count must be an integer literal"
        );
        assert!(
            classify_wrapper("Cypress._.times(5, (x) => {").is_none(),
            "lambda must be parameterless"
        );
        assert!(classify_wrapper("Cypress._.times(5)").is_none());
    }
}

#[cfg(test)]
mod scanner_tests {
    use super::*;
    use cypress_test_helpers::parser::{find_block_end, opens_block};

    #[test]
    fn test_simple_block() {
        let lines = doc("it('x', () => {\n  cy.visit('/');\n});");
        assert_eq!(find_block_end(&lines, 0), Some(2));
    }

    #[test]
    fn test_nested_blocks() {
        let lines = doc(
            "describe('outer', () => {\n  it('inner', () => {\n    if (a) { b(); }\n  });\n});",
        );
        assert_eq!(find_block_end(&lines, 0), Some(4), "outer closes last");
        assert_eq!(find_block_end(&lines, 1), Some(3), "inner closes before outer");
    }

    #[test]
    fn test_one_line_block() {
        let lines = doc("it('x', () => {});");
        assert_eq!(find_block_end(&lines, 0), Some(0));
    }

    #[test]
    fn test_braces_in_strings_are_skipped() {
        let lines = doc("it('has } and { in name', () => {\n  cy.log(\"}\");\n});");
        assert_eq!(
            find_block_end(&lines, 0),
            Some(2),
            "quoted braces must not affect depth"
        );
    }

    #[test]
    fn test_template_literal_spans_lines() {
        let lines = doc(
            "it('x', () => {\n  cy.log(`first }\n    second }`);\n});",
        );
        assert_eq!(
            find_block_end(&lines, 0),
            Some(3),
            "braces inside a multi-line template literal are skipped"
        );
    }

    #[test]
    fn test_unclosed_block_not_found() {
        let lines = doc("it('x', () => {\n  cy.visit('/');");
        assert_eq!(find_block_end(&lines, 0), None);
    }

    #[test]
    fn test_stray_closer_is_ignored() {
        // Depth is clamped at zero; a closer before any opener never counts
        // as the block end.
        let lines = doc("});\nit('x', () => {\n});");
        assert_eq!(find_block_end(&lines, 0), Some(2));
    }

    #[test]
    fn test_opens_block() {
        assert!(opens_block("it('x', () => {"));
        assert!(!opens_block("it('x', myHelper);"));
        assert!(!opens_block("cy.log('{');"), "quoted brace does not open");
    }
}

#[cfg(test)]
mod edit_batch_tests {
    use super::*;
    use cypress_test_helpers::rewrite::{EditBatch, RewriteError};

    #[test]
    fn test_pre_edit_numbering() {
        let lines = doc("a\nb\nc");
        let mut batch = EditBatch::new();
        batch.insert_before(3, "tail");
        batch.replace(1, "B");
        batch.insert_before(0, "head");
        let out = batch.apply(&lines).expect("batch should apply");
        assert_eq!(out, vec!["head", "a", "B", "c", "tail"]);
    }

    #[test]
    fn test_delete_and_insert_same_index() {
        let lines = doc("a\nb");
        let mut batch = EditBatch::new();
        batch.delete(0);
        batch.insert_before(0, "x");
        let out = batch.apply(&lines).expect("batch should apply");
        assert_eq!(out, vec!["x", "b"]);
    }

    #[test]
    fn test_conflicting_replaces_rejected() {
        let lines = doc("a");
        let mut batch = EditBatch::new();
        batch.replace(0, "x");
        batch.replace(0, "y");
        assert_eq!(
            batch.apply(&lines),
            Err(RewriteError::EditConflict { line: 0 })
        );
    }

    #[test]
    fn test_replace_of_deleted_line_rejected() {
        let lines = doc("a\nb");
        let mut batch = EditBatch::new();
        batch.delete(1);
        batch.replace(1, "x");
        assert_eq!(
            batch.apply(&lines),
            Err(RewriteError::EditConflict { line: 1 })
        );
    }

    #[test]
    fn test_out_of_range_rejected() {
        let lines = doc("a");
        let mut batch = EditBatch::new();
        batch.replace(1, "x");
        assert_eq!(
            batch.apply(&lines),
            Err(RewriteError::LineOutOfRange { line: 1, len: 1 })
        );

        let mut batch = EditBatch::new();
        batch.insert_before(2, "x");
        assert_eq!(
            batch.apply(&lines),
            Err(RewriteError::LineOutOfRange { line: 2, len: 1 })
        );
    }
}

#[cfg(test)]
mod toggle_only_tests {
    use super::*;

    #[test]
    fn test_toggle_adds_and_removes_modifier() {
        let original = doc("it('does x', () => {\n});");

        let mut host = BufferHost::new(original.clone(), 0);
        assert_eq!(toggle_only(&mut host).unwrap(), Outcome::Applied);
        let toggled = host.into_lines();
        assert_eq!(toggled[0], "it.only('does x', () => {");
        assert_eq!(toggled[1], "});", "other lines are never touched");

        let mut host = BufferHost::new(toggled, 0);
        assert_eq!(toggle_only(&mut host).unwrap(), Outcome::Applied);
        assert_eq!(
            host.into_lines(),
            original,
            "toggling twice must restore the original line"
        );
    }

    #[test]
    fn test_cursor_below_declaration() {
        let lines = doc("describe('s', () => {\n  it('x', () => {\n    cy.visit('/');\n  });\n});");
        let mut host = BufferHost::new(lines, 2);
        assert_eq!(toggle_only(&mut host).unwrap(), Outcome::Applied);
        let out = host.into_lines();
        assert_eq!(
            out[1], "  it.only('x', () => {",
            "nearest declaration above the cursor wins"
        );
        assert_eq!(out[0], "describe('s', () => {");
    }

    #[test]
    fn test_declaration_not_found() {
        let original = doc("// just a comment\ncy.visit('/');");
        let mut host = BufferHost::new(original.clone(), 1);
        assert_eq!(toggle_only(&mut host).unwrap(), Outcome::Rejected);
        assert_eq!(host.notices(), &[NOT_FOUND_NOTICE.to_string()]);
        assert_eq!(
            host.into_lines(),
            original,
            "a rejected run must leave the document unchanged"
        );
    }

    #[test]
    fn test_call_suffix_kept_verbatim() {
        let lines = doc("  it(  'odd spacing',()=>{");
        let mut host = BufferHost::new(lines, 0);
        assert_eq!(toggle_only(&mut host).unwrap(), Outcome::Applied);
        assert_eq!(host.into_lines()[0], "  it.only(  'odd spacing',()=>{");
    }
}

#[cfg(test)]
mod toggle_times_tests {
    use super::*;
    use cypress_test_helpers::host::Host;

    const SIMPLE: &str = "it('x', () => {\n  cy.visit('/');\n});";

    #[test]
    fn test_wrap_simple_block() {
        let mut host = BufferHost::new(doc(SIMPLE), 1).with_count(Some(5));
        assert_eq!(toggle_times(&mut host).unwrap(), Outcome::Applied);
        assert_eq!(
            host.into_lines(),
            vec![
                "Cypress._.times(5, () => {",
                "\tit('x', () => {",
                "\t  cy.visit('/');",
                "\t});",
                "});",
            ]
        );
    }

    #[test]
    fn test_unwrap_restores_original() {
        let original = doc(SIMPLE);
        let mut host = BufferHost::new(original.clone(), 1).with_count(Some(5));
        assert_eq!(toggle_times(&mut host).unwrap(), Outcome::Applied);
        let wrapped = host.into_lines();

        // Cursor anywhere in the wrapped body; unwrap needs no count.
        let mut host = BufferHost::new(wrapped, 2);
        assert_eq!(toggle_times(&mut host).unwrap(), Outcome::Applied);
        assert_eq!(
            host.into_lines(),
            original,
            "unwrap(wrap(doc)) must restore the document line for line"
        );
    }

    #[test]
    fn test_round_trip_nested_with_space_indent() {
        let original = doc(
            "describe('s', () => {\n    it('x', () => {\n        cy.visit('/');\n        if (a) { b(); }\n    });\n});",
        );
        let mut host = BufferHost::new(original.clone(), 2)
            .with_count(Some(3))
            .with_indent_unit("    ");
        assert_eq!(toggle_times(&mut host).unwrap(), Outcome::Applied);
        let wrapped = host.into_lines();
        assert_eq!(wrapped[1], "    Cypress._.times(3, () => {");
        assert_eq!(wrapped[2], "        it('x', () => {");
        assert_eq!(wrapped[6], "    });", "wrapper close matches decl indent");

        let mut host = BufferHost::new(wrapped, 3).with_indent_unit("    ");
        assert_eq!(toggle_times(&mut host).unwrap(), Outcome::Applied);
        assert_eq!(host.into_lines(), original);
    }

    #[test]
    fn test_wrap_indentation_exactness() {
        let original = doc(SIMPLE);
        let mut host = BufferHost::new(original.clone(), 0).with_count(Some(2));
        assert_eq!(toggle_times(&mut host).unwrap(), Outcome::Applied);
        let wrapped = host.into_lines();
        for (before, after) in original.iter().zip(&wrapped[1..=3]) {
            assert_eq!(
                after,
                &format!("\t{before}"),
                "every block line gains exactly one indentation unit"
            );
        }
    }

    #[test]
    fn test_one_line_block_round_trip() {
        let original = doc("it('x', () => {});");
        let mut host = BufferHost::new(original.clone(), 0).with_count(Some(2));
        assert_eq!(toggle_times(&mut host).unwrap(), Outcome::Applied);
        assert_eq!(
            host.lines(),
            vec![
                "Cypress._.times(2, () => {".to_string(),
                "\tit('x', () => {});".to_string(),
                "});".to_string(),
            ]
        );
        let wrapped = host.into_lines();

        let mut host = BufferHost::new(wrapped, 1);
        assert_eq!(toggle_times(&mut host).unwrap(), Outcome::Applied);
        assert_eq!(host.into_lines(), original);
    }

    #[test]
    fn test_unwrap_leaves_unindented_lines_alone() {
        let wrapped = doc(
            "Cypress._.times(2, () => {\n\tit('x', () => {\n\n// flush-left comment\n\t});\n});",
        );
        let mut host = BufferHost::new(wrapped, 1);
        assert_eq!(toggle_times(&mut host).unwrap(), Outcome::Applied);
        assert_eq!(
            host.into_lines(),
            vec!["it('x', () => {", "", "// flush-left comment", "});"],
            "lines without the leading unit are kept, wrapper lines removed"
        );
    }

    #[test]
    fn test_wrap_unclosed_block_is_atomic() {
        let original = doc("it('x', () => {\n  cy.visit('/');");
        let mut host = BufferHost::new(original.clone(), 1).with_count(Some(4));
        assert_eq!(toggle_times(&mut host).unwrap(), Outcome::Rejected);
        assert_eq!(host.notices(), &[BLOCK_END_NOTICE.to_string()]);
        assert_eq!(host.into_lines(), original, "no partial edits on failure");
    }

    #[test]
    fn test_wrap_degenerate_declaration_rejected() {
        // Declaration matches but its block does not open on the same line;
        // the range would be meaningless.
        let original = doc("it('x', myHelper);\ndescribe('s', () => {\n});");
        let mut host = BufferHost::new(original.clone(), 0).with_count(Some(2));
        assert_eq!(toggle_times(&mut host).unwrap(), Outcome::Rejected);
        assert_eq!(host.notices(), &[BLOCK_END_NOTICE.to_string()]);
        assert_eq!(host.into_lines(), original);
    }

    #[test]
    fn test_unwrap_unclosed_wrapper_is_atomic() {
        let original = doc("Cypress._.times(2, () => {\nit('x', () => {\n});");
        let mut host = BufferHost::new(original.clone(), 1);
        assert_eq!(toggle_times(&mut host).unwrap(), Outcome::Rejected);
        assert_eq!(host.notices(), &[WRAPPER_END_NOTICE.to_string()]);
        assert_eq!(host.into_lines(), original);
    }

    #[test]
    fn test_cancelled_prompt_is_silent_noop() {
        let original = doc(SIMPLE);
        let mut host = BufferHost::new(original.clone(), 0).with_count(None);
        assert_eq!(toggle_times(&mut host).unwrap(), Outcome::Cancelled);
        assert!(host.notices().is_empty(), "cancel shows no notice");
        assert_eq!(host.into_lines(), original);
    }

    #[test]
    fn test_not_found_above_cursor() {
        let original = doc("// comment only");
        let mut host = BufferHost::new(original.clone(), 0);
        assert_eq!(toggle_times(&mut host).unwrap(), Outcome::Rejected);
        assert_eq!(host.notices(), &[NOT_FOUND_NOTICE.to_string()]);
        assert_eq!(host.into_lines(), original);
    }
}
