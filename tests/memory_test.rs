mod common;
use common::*;
use forth::mach::Runtime;

#[test]
fn test_store_and_fetch() {
    let mut r = Runtime::default();
    run(&mut r, "42 100 ! 100 @");
    assert_eq!(r.stack(), [42]);
}

#[test]
fn test_overwrite() {
    let mut r = Runtime::default();
    run(&mut r, "1 200 ! 2 200 ! 200 @");
    assert_eq!(r.stack(), [2]);
}

#[test]
fn test_memory_starts_zeroed() {
    let mut r = Runtime::default();
    run(&mut r, "300 @");
    assert_eq!(r.stack(), [0]);
}

#[test]
fn test_invalid_addresses() {
    let mut r = Runtime::default();
    assert_eq!(run(&mut r, "123 -1 !"), "Error: invalid store address -1\n");
    assert_eq!(run(&mut r, "-5 @"), "Error: invalid fetch address -5\n");
    assert_eq!(run(&mut r, "1024 @"), "Error: invalid fetch address 1024\n");
    assert!(r.stack().is_empty());
}

#[test]
fn test_variable_pushes_its_address() {
    let mut r = Runtime::default();
    run(&mut r, "VARIABLE X");
    run(&mut r, "X");
    assert_eq!(r.stack(), [100]);
    run(&mut r, "DROP 42 X ! X @");
    assert_eq!(r.stack(), [42]);
}

#[test]
fn test_variables_allocate_sequentially() {
    let mut r = Runtime::default();
    run(&mut r, "VARIABLE A VARIABLE B VARIABLE C");
    run(&mut r, "A B C");
    assert_eq!(r.stack(), [100, 101, 102]);
}

#[test]
fn test_variable_needs_a_name() {
    let mut r = Runtime::default();
    assert_eq!(run(&mut r, "VARIABLE"), "Error: VARIABLE needs a name\n");
}

#[test]
fn test_variable_limit() {
    let mut r = Runtime::default();
    for i in 0..32 {
        assert_eq!(run(&mut r, &format!("VARIABLE V{}", i)), "");
    }
    assert_eq!(
        run(&mut r, "VARIABLE TOO-MANY"),
        "Error: max VARIABLES reached\n"
    );
}
