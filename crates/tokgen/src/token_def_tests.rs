use crate::token_def::{extract, parse_token_rule, TokenRule};

fn rule(name: &str, value: &str) -> TokenRule {
    TokenRule {
        name: name.to_string(),
        value: value.to_string(),
    }
}

#[test]
fn test_single_rule() {
    assert_eq!(parse_token_rule("KW_IF : 'if' ;"), Some(rule("KW_IF", "'if' ")));
    assert_eq!(parse_token_rule("IF:'if';"), Some(rule("IF", "'if'")));
    assert_eq!(parse_token_rule("SEMI : ';' ;"), Some(rule("SEMI", "';' ")));
    assert_eq!(
        parse_token_rule("WS : [ \\t\\r\\n]+ -> skip ;"),
        Some(rule("WS", "[ \\t\\r\\n]+ -> skip "))
    );
}

#[test]
fn test_rejected_lines() {
    // parser rules and fragments are lowercase
    assert_eq!(parse_token_rule("fragment Digit : [0-9] ;"), None);
    assert_eq!(parse_token_rule("expr : term ;"), None);
    assert_eq!(parse_token_rule("Kw : 'k' ;"), None);
    // no terminating semicolon
    assert_eq!(parse_token_rule("ID : [a-z]+"), None);
    // empty value
    assert_eq!(parse_token_rule("EMPTY :;"), None);
    assert_eq!(parse_token_rule("grammar Nova;"), None);
}

#[test]
fn test_extract_order_and_skips() {
    let grammar = "
grammar Nova;

// keywords
MODULE : 'module' ;
  FUN : 'fun' ;
program : decl* EOF ;
decl
    : fun_decl
    ;
ARROW : '->' ;
";
    let tokens = extract(grammar);
    let names: Vec<&str> = tokens.names().collect();
    assert_eq!(names, vec!["MODULE", "FUN", "ARROW"]);
    assert_eq!(tokens.rules[1], rule("FUN", "'fun' "));
    // grammar, program, decl, fun_decl, ;
    assert_eq!(tokens.skipped, 5);
}

#[test]
fn test_extract_keeps_duplicates() {
    let tokens = extract("A : 'a' ;\nB : 'b' ;\nA : 'c' ;\n");
    let names: Vec<&str> = tokens.names().collect();
    assert_eq!(names, vec!["A", "B", "A"]);
}

#[test]
fn test_extract_empty() {
    let tokens = extract("");
    assert!(tokens.is_empty());
    assert_eq!(tokens.skipped, 0);

    let tokens = extract("\n   \n// only a comment\n");
    assert!(tokens.is_empty());
    assert_eq!(tokens.skipped, 0);
}

#[test]
fn test_extract_crlf() {
    let tokens = extract("LET : 'let' ;\r\nIN : 'in' ;\r\n");
    assert_eq!(tokens.rules, vec![rule("LET", "'let' "), rule("IN", "'in' ")]);
}

#[test]
fn test_extract_lone_cr_and_other_breaks() {
    let tokens = extract("LET : 'let' ;\rIN : 'in' ;\r");
    assert_eq!(tokens.rules, vec![rule("LET", "'let' "), rule("IN", "'in' ")]);
    assert_eq!(tokens.skipped, 0);

    let tokens = extract("A : 'a' ;\x0bB : 'b' ;\x0cC : 'c' ;\u{2028}D : 'd' ;\u{85}E : 'e' ;");
    let names: Vec<&str> = tokens.names().collect();
    assert_eq!(names, vec!["A", "B", "C", "D", "E"]);
    assert!(tokens.iter().all(|x| !x.value.contains(['\r', '\x0b', '\x0c'])));
}
