use respwire::{serialize, CommandContainer, CommandWrapper, SingleCommand};

#[test]
fn container_built_with_new_and_push_matches_collect() {
    let mut built = CommandContainer::new();
    assert!(built.commands.is_empty());
    built.push(SingleCommand::new(["PING"]));
    built.push(SingleCommand::new(["GET", "mykey"]));

    let collected: CommandContainer<'_> = vec![
        SingleCommand::new(["PING"]),
        SingleCommand::new(["GET", "mykey"]),
    ]
    .into_iter()
    .collect();

    assert_eq!(built, collected);
}

#[test]
fn container_built_incrementally_serializes_like_a_pipeline() {
    let mut container = CommandContainer::new();
    container.push(SingleCommand::new(["SET", "a", "1"]));
    container.push(SingleCommand::new(["SET", "b", "2"]));

    let command: CommandWrapper<'_> = container.into();
    let mut out = Vec::new();
    serialize(&mut out, &command).unwrap();

    assert_eq!(
        out,
        b"*3\r\n$3\r\nSET\r\n$1\r\na\r\n$1\r\n1\r\n*3\r\n$3\r\nSET\r\n$1\r\nb\r\n$1\r\n2\r\n".to_vec()
    );
}
