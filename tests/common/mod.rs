use forth::mach::Runtime;

pub fn run(runtime: &mut Runtime, line: &str) -> String {
    runtime.enter(line)
}
