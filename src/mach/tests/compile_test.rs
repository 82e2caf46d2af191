use super::*;

#[test]
fn test_definition_compiles_and_runs() {
    let mut r = Runtime::default();
    assert_eq!(run(&mut r, ": DOUBLE-SUM + 2 * ;"), "");
    assert_eq!(run(&mut r, "3 4 DOUBLE-SUM"), "");
    assert_eq!(r.stack(), [14]);
}

#[test]
fn test_definition_spans_lines() {
    let mut r = Runtime::default();
    run(&mut r, ": FOUR 2");
    assert!(r.is_compiling());
    run(&mut r, "2 + ;");
    assert!(!r.is_compiling());
    run(&mut r, "FOUR");
    assert_eq!(r.stack(), [4]);
}

#[test]
fn test_colon_without_name() {
    let mut r = Runtime::default();
    assert_eq!(run(&mut r, ":"), "Error: : requires a name\n");
    assert!(!r.is_compiling());
}

#[test]
fn test_nested_colon_rejected() {
    let mut r = Runtime::default();
    assert_eq!(
        run(&mut r, ": OUTER : INNER ;"),
        "Error: nested definition\n? INNER\n"
    );
    assert!(!r.is_compiling());
    // The stray colon and the unknown name were both skipped; OUTER is
    // an empty body and the line's remaining tokens still ran.
    run(&mut r, "5 OUTER");
    assert_eq!(r.stack(), [5]);
}

#[test]
fn test_unknown_word_skipped_in_body() {
    let mut r = Runtime::default();
    assert_eq!(run(&mut r, ": BUMP 1 GARBLE + ;"), "? GARBLE\n");
    run(&mut r, "10 BUMP");
    assert_eq!(r.stack(), [11]);
}

#[test]
fn test_word_visible_before_body_closes() {
    let mut r = Runtime::default();
    run(&mut r, ": SELF 1 SELF DROP ;");
    assert!(!r.is_compiling());
    // Not invoked: the body resolved its own name at compile time, so
    // the reference exists. Running it would recurse forever, which is
    // exactly the semantics the dictionary registration order implies.
}

#[test]
fn test_interrupt_abandons_definition() {
    let mut r = Runtime::default();
    run(&mut r, ": HALFWAY 7");
    assert!(r.is_compiling());
    r.interrupt();
    assert!(!r.is_compiling());
    // The sealed fragment still runs as far as it was compiled.
    run(&mut r, "HALFWAY");
    assert_eq!(r.stack(), [7]);
}

#[test]
fn test_semicolon_outside_definition() {
    let mut r = Runtime::default();
    assert_eq!(run(&mut r, ";"), "? ;\n");
}
