#[cfg(test)]
mod tests {
    use spout::{
        AsValue, OperationDef, ParamDef, Payload, ProviderDescriptor, ProviderSqlSource,
        SqlProvider, ValueKind,
    };
    use std::{sync::Arc, thread};

    #[derive(Default)]
    struct EchoSqlProvider;

    impl SqlProvider for EchoSqlProvider {
        fn operations() -> Vec<OperationDef<Self>> {
            vec![OperationDef::sql(
                "find_by_id",
                [ParamDef::new("id", ValueKind::Integer)],
                |_, args| {
                    let id = i64::try_from_value(args[0].clone())?;
                    Ok(format!("SELECT * FROM events WHERE id = {id}"))
                },
            )]
        }
    }

    #[test]
    fn concurrent_binds_never_leak_across_calls() {
        let source = Arc::new(
            ProviderSqlSource::new(ProviderDescriptor::new::<EchoSqlProvider>("find_by_id"))
                .unwrap(),
        );
        thread::scope(|scope| {
            for id in 0..16i64 {
                let source = Arc::clone(&source);
                scope.spawn(move || {
                    for _ in 0..100 {
                        let statement = source.bind(&Payload::value(id)).unwrap();
                        assert_eq!(statement.sql, format!("SELECT * FROM events WHERE id = {id}"));
                    }
                });
            }
        });
    }
}
