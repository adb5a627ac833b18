use crate::invocation::Invocation;

fn invocation(args: &[&str]) -> Invocation {
    Invocation::new(
        3,
        "java".into(),
        args.iter().map(|arg| arg.to_string()).collect(),
        vec![("threads".into(), "8".into()), ("mode".into(), "1".into())],
    )
}

#[test]
fn accessors() {
    let invocation = invocation(&["-jar", "lock-free.jar", "8", "8", "1"]);
    assert_eq!(3, invocation.index());
    assert_eq!("java", invocation.program());
    assert_eq!(5, invocation.args().len());
    assert_eq!(Some("8"), invocation.value("threads"));
    assert_eq!(Some("1"), invocation.value("mode"));
    assert_eq!(None, invocation.value("ops"));
    assert_eq!(2, invocation.point().len());
}

#[test]
fn plain_command_line() {
    let invocation = invocation(&["-jar", "lock-free.jar", "8", "%e"]);
    assert_eq!("java -jar lock-free.jar 8 %e", invocation.command_line());
    assert_eq!(invocation.command_line(), invocation.to_string());
}

#[test]
fn quoted_command_line() {
    let invocation = invocation(&["-c", "exit 3", "", "it's"]);
    assert_eq!(r"java -c 'exit 3' '' 'it'\''s'", invocation.command_line());
}

#[test]
fn to_command() {
    let invocation = invocation(&["-version"]);
    let command = invocation.to_command();
    assert_eq!("java", command.get_program());
    assert_eq!(vec!["-version"], command.get_args().collect::<Vec<_>>());
}
