use crate::Query;

#[test]
fn arithmetic_precedence() {
    let input = "SELECT u.a + u.b * 2 - -1 FROM User u";

    let res = Query::expect_valid_cst(input);

    insta::assert_snapshot!(res, @r#"
    SourceFile
      SelectStatement
        SelectClause
          KwSelect "SELECT"
          SelectExpression
            SimpleArithmeticExpression
              SimpleArithmeticExpression
                PathExpression
                  IdentificationVariable
                    Ident "u"
                  Dot "."
                  FieldIdentificationVariable
                    Ident "a"
                Plus "+"
                ArithmeticTerm
                  PathExpression
                    IdentificationVariable
                      Ident "u"
                    Dot "."
                    FieldIdentificationVariable
                      Ident "b"
                  Star "*"
                  Literal
                    IntegerLit "2"
              Minus "-"
              ArithmeticFactor
                Minus "-"
                Literal
                  IntegerLit "1"
        FromClause
          KwFrom "FROM"
          IdentificationVariableDeclaration
            RangeVariableDeclaration
              AbstractSchemaName
                Ident "User"
              AliasIdentificationVariable
                Ident "u"
    "#);
}

#[test]
fn division_is_left_associative() {
    let input = "SELECT u.a / 2 / 3 FROM User u";

    let query = Query::expect_valid(input);
    let outer = query
        .syntax()
        .descendants()
        .find(|n| n.kind() == crate::parser::SyntaxKind::ArithmeticTerm)
        .unwrap();
    let inner = outer.first_child().unwrap();
    assert_eq!(inner.kind(), crate::parser::SyntaxKind::ArithmeticTerm);
    assert_eq!(inner.text().to_string(), "u.a / 2");
}

#[test]
fn literals() {
    let input = "SELECT 'x', 1.5, 42, TRUE, false FROM User u";

    let res = Query::expect_valid_cst(input);

    insta::assert_snapshot!(res, @r#"
    SourceFile
      SelectStatement
        SelectClause
          KwSelect "SELECT"
          SelectExpression
            Literal
              StringLit "'x'"
          Comma ","
          SelectExpression
            Literal
              FloatLit "1.5"
          Comma ","
          SelectExpression
            Literal
              IntegerLit "42"
          Comma ","
          SelectExpression
            Literal
              KwTrue "TRUE"
          Comma ","
          SelectExpression
            Literal
              KwFalse "false"
        FromClause
          KwFrom "FROM"
          IdentificationVariableDeclaration
            RangeVariableDeclaration
              AbstractSchemaName
                Ident "User"
              AliasIdentificationVariable
                Ident "u"
    "#);
}

#[test]
fn parameters() {
    let input = "SELECT ?1, :name FROM User u";

    let res = Query::expect_valid_cst(input);

    insta::assert_snapshot!(res, @r#"
    SourceFile
      SelectStatement
        SelectClause
          KwSelect "SELECT"
          SelectExpression
            PositionalParameter
              Question "?"
              IntegerLit "1"
          Comma ","
          SelectExpression
            NamedParameter
              Colon ":"
              Ident "name"
        FromClause
          KwFrom "FROM"
          IdentificationVariableDeclaration
            RangeVariableDeclaration
              AbstractSchemaName
                Ident "User"
              AliasIdentificationVariable
                Ident "u"
    "#);
}

#[test]
fn general_case() {
    let input = "SELECT CASE WHEN u.age > 18 THEN 'adult' ELSE 'minor' END FROM User u";

    let res = Query::expect_valid_cst(input);

    insta::assert_snapshot!(res, @r#"
    SourceFile
      SelectStatement
        SelectClause
          KwSelect "SELECT"
          SelectExpression
            GeneralCaseExpression
              KwCase "CASE"
              WhenClause
                KwWhen "WHEN"
                ComparisonExpression
                  PathExpression
                    IdentificationVariable
                      Ident "u"
                    Dot "."
                    FieldIdentificationVariable
                      Ident "age"
                  ComparisonOperator
                    Gt ">"
                  Literal
                    IntegerLit "18"
                KwThen "THEN"
                Literal
                  StringLit "'adult'"
              KwElse "ELSE"
              Literal
                StringLit "'minor'"
              KwEnd "END"
        FromClause
          KwFrom "FROM"
          IdentificationVariableDeclaration
            RangeVariableDeclaration
              AbstractSchemaName
                Ident "User"
              AliasIdentificationVariable
                Ident "u"
    "#);
}

#[test]
fn simple_case() {
    let input = "SELECT CASE u.role WHEN 'admin' THEN 1 WHEN 'user' THEN 2 ELSE 0 END FROM User u";

    let res = Query::expect_valid_cst(input);

    insta::assert_snapshot!(res, @r#"
    SourceFile
      SelectStatement
        SelectClause
          KwSelect "SELECT"
          SelectExpression
            SimpleCaseExpression
              KwCase "CASE"
              PathExpression
                IdentificationVariable
                  Ident "u"
                Dot "."
                FieldIdentificationVariable
                  Ident "role"
              SimpleWhenClause
                KwWhen "WHEN"
                Literal
                  StringLit "'admin'"
                KwThen "THEN"
                Literal
                  IntegerLit "1"
              SimpleWhenClause
                KwWhen "WHEN"
                Literal
                  StringLit "'user'"
                KwThen "THEN"
                Literal
                  IntegerLit "2"
              KwElse "ELSE"
              Literal
                IntegerLit "0"
              KwEnd "END"
        FromClause
          KwFrom "FROM"
          IdentificationVariableDeclaration
            RangeVariableDeclaration
              AbstractSchemaName
                Ident "User"
              AliasIdentificationVariable
                Ident "u"
    "#);
}

#[test]
fn case_in_order_by() {
    let input = "SELECT u FROM User u ORDER BY CASE WHEN u.vip = TRUE THEN 0 ELSE 1 END ASC, u.name";

    let res = Query::expect_valid_ast(input);

    insta::assert_snapshot!(res, @r"
    Root
      Select
        Expr u
        From User u
        OrderBy CASE WHEN u.vip = TRUE THEN 0 ELSE 1 END ASC
        OrderBy u.name ASC
    ");
}

#[test]
fn contextual_keyword_as_variable() {
    let input = "SELECT count FROM Counter count WHERE count.value > 0";

    let res = Query::expect_valid_ast(input);

    insta::assert_snapshot!(res, @r"
    Root
      Select
        Expr count
        From Counter count
        Where count.value > 0
    ");
}
