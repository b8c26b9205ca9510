#[cfg(test)]
mod tests {
    use indoc::indoc;
    use spout::{
        BoundStatement, CrudOperation, Namespace, OperationDef, ParamDef, Payload,
        ProviderDescriptor, ProviderSqlSource, SqlProvider, SqlSource, StaticSqlSource,
        TokenTemplate, ValueKind,
    };

    #[derive(Default)]
    struct OrderSqlProvider;

    impl SqlProvider for OrderSqlProvider {
        fn operations() -> Vec<OperationDef<Self>> {
            vec![OperationDef::sql(
                "insert",
                [ParamDef::any("customer"), ParamDef::any("total")],
                |_, _| {
                    Ok(indoc! {r#"
                        INSERT INTO orders (customer, total)
                        VALUES (#{customer}, #{total})
                    "#}
                    .trim()
                    .into())
                },
            )]
        }
    }

    #[test]
    fn provider_output_is_templated() {
        let source =
            ProviderSqlSource::new(ProviderDescriptor::new::<OrderSqlProvider>("insert")).unwrap();
        let statement = source
            .bind(&Payload::named([("customer", 3i64), ("total", 120i64)]))
            .unwrap();
        assert_eq!(
            statement.sql,
            indoc! {r#"
                INSERT INTO orders (customer, total)
                VALUES (?, ?)
            "#}
            .trim(),
        );
        assert_eq!(
            statement.property_names().collect::<Vec<_>>(),
            vec!["customer", "total"],
        );
        assert_eq!(statement.reference, ValueKind::Map);
        assert!(statement.extra.is_empty());
    }

    #[test]
    fn static_source_parses_once() {
        let template = TokenTemplate::new().unwrap();
        let source =
            StaticSqlSource::new("SELECT * FROM orders WHERE id = #{id}", &template).unwrap();
        let statement = source.bound_statement(&Payload::value(9i64)).unwrap();
        assert_eq!(statement.sql, "SELECT * FROM orders WHERE id = ?");
        assert_eq!(statement.property_names().collect::<Vec<_>>(), vec!["id"]);
    }

    /// Generator provider covering the whole CRUD catalogue. The SQL here is
    /// deliberately schematic, the catalogue only declares which operations a
    /// dispatcher must be able to resolve.
    #[derive(Default)]
    struct CrudGenerator {
        namespace: Namespace,
    }

    impl SqlProvider for CrudGenerator {
        fn operations() -> Vec<OperationDef<Self>> {
            CrudOperation::ALL
                .iter()
                .map(|operation| {
                    OperationDef::sql(operation.name(), [ParamDef::any("entity")], |p: &CrudGenerator, _| {
                        Ok(format!("-- generated for {}", p.namespace))
                    })
                })
                .collect()
        }
        fn requires_namespace() -> bool {
            true
        }
        fn set_namespace(&mut self, namespace: Namespace) {
            self.namespace = namespace;
        }
    }

    #[test]
    fn crud_catalogue_resolves_every_operation() {
        for operation in CrudOperation::ALL {
            let source =
                ProviderSqlSource::new(operation.descriptor::<CrudGenerator>("OrderMapper"))
                    .unwrap();
            let statement = source.bind(&Payload::None).unwrap();
            assert_eq!(statement.sql, "-- generated for OrderMapper");
        }
    }

    #[test]
    fn crud_generator_without_namespace_fails_eagerly() {
        let error =
            ProviderSqlSource::new(ProviderDescriptor::new::<CrudGenerator>("save")).unwrap_err();
        assert!(error.message().contains("namespace"));
    }

    #[test]
    fn display_shows_the_sql() {
        let template = TokenTemplate::new().unwrap();
        let source = StaticSqlSource::new("SELECT 1", &template).unwrap();
        let statement = source.bound_statement(&Payload::None).unwrap();
        assert_eq!(statement.to_string(), "SELECT 1");
    }

    #[test]
    fn display_truncates_long_multibyte_sql() {
        let statement = BoundStatement {
            sql: "é".repeat(300),
            ..Default::default()
        };
        let rendered = statement.to_string();
        assert!(rendered.ends_with("..."));
        assert!(rendered.trim_end_matches("...").chars().all(|c| c == 'é'));
    }
}
