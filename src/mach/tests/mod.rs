use crate::mach::Runtime;

mod compile_test;

fn run(runtime: &mut Runtime, line: &str) -> String {
    runtime.enter(line)
}
