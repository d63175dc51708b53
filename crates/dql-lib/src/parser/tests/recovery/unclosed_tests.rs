use crate::Query;

#[test]
fn unclosed_in_list() {
    let res = Query::expect_invalid("SELECT u FROM User u WHERE u.id IN (1, 2");

    insta::assert_snapshot!(res, @r"
    error: missing closing `)`; reached end of input
      |
    1 | SELECT u FROM User u WHERE u.id IN (1, 2
      |                                    -^^^^
      |                                    |
      |                                    parenthesis is opened here
    ");
}

#[test]
fn unclosed_field_set() {
    let res = Query::expect_invalid("SELECT PARTIAL u.{id, name FROM User u");

    insta::assert_snapshot!(res, @r"
    error: missing closing `}`; found `FROM`
      |
    1 | SELECT PARTIAL u.{id, name FROM User u
      |                  -^^^^^^^^^^^^^
      |                  |
      |                  brace is opened here
    ");
}

#[test]
fn unclosed_function_call() {
    let query = Query::expect("SELECT COUNT(u.id FROM User u");

    assert!(!query.is_valid());
    insta::assert_snapshot!(
        query.dump_diagnostics_summary(),
        @"error at 12..22: missing closing `)`; found `FROM` (related: parenthesis is opened here at 12..13)"
    );
    assert_eq!(query.statements().count(), 1);
}

#[test]
fn inner_error_wins_over_unclosed_paren() {
    let query = Query::expect("SELECT u FROM User u WHERE u.id IN (1,");

    assert!(!query.is_valid());
    insta::assert_snapshot!(
        query.dump_diagnostics_summary(),
        @"error at 38..38: expected an expression: reached end of input"
    );
}

#[test]
fn unclosed_subquery() {
    let query = Query::expect("SELECT u FROM User u WHERE EXISTS (SELECT t FROM Team t");

    assert!(!query.is_valid());
    insta::assert_snapshot!(
        query.dump_diagnostics_summary(),
        @"error at 34..55: missing closing `)`; reached end of input (related: parenthesis is opened here at 34..35)"
    );
}

#[test]
fn unterminated_string() {
    let query = Query::expect("SELECT u FROM User u WHERE u.name = 'bob");

    assert!(!query.is_valid());
    insta::assert_snapshot!(
        query.dump_diagnostics_summary(),
        @"error at 36..40: unterminated string literal: missing closing `'` (fix: close the string)"
    );
    assert_eq!(
        query.syntax().text().to_string(),
        "SELECT u FROM User u WHERE u.name = 'bob"
    );
}
