use std::sync::{Arc, Mutex};

use btooling::{
    DefaultToolExecutor, ToolArguments, ToolDescriptor, ToolError, ToolErrorKind, ToolExecutor,
    ToolRegistry, optional_integer, optional_string,
};

fn registry_with_recorder(calls: Arc<Mutex<Vec<String>>>) -> ToolRegistry {
    let mut registry = ToolRegistry::new();

    let recorded = Arc::clone(&calls);
    registry.register_sync_fn(
        ToolDescriptor::new(
            "get_location_description",
            "get_location_description(style='brief')",
            "Describes a place",
        ),
        move |args| {
            let style = optional_string(args, "style", "brief")?;
            recorded.lock().expect("calls lock").push(format!("location:{style}"));
            match style.as_str() {
                "brief" => Ok("Misty Hollow".to_string()),
                "detailed" => Ok("Misty Hollow, with a crooked bridge".to_string()),
                other => Err(ToolError::invalid_arguments(format!("unknown style '{other}'"))),
            }
        },
    );

    let recorded = Arc::clone(&calls);
    registry.register_fn(
        ToolDescriptor::new("get_elf_name", "get_elf_name(count=1)", "Elf names"),
        move |args| {
            let recorded = Arc::clone(&recorded);
            async move {
                let count = optional_integer(&args, "count", 1)?;
                recorded.lock().expect("calls lock").push(format!("elf:{count}"));
                Ok(vec!["Elarion"; count as usize].join(", "))
            }
        },
    );

    registry
}

#[tokio::test]
async fn executor_dispatches_by_name_with_parsed_arguments() {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let executor = DefaultToolExecutor::new(Arc::new(registry_with_recorder(Arc::clone(&calls))));

    let detailed = executor
        .execute(
            "get_location_description",
            &ToolArguments::new().with("style", "detailed"),
        )
        .await
        .expect("detailed description should succeed");
    assert_eq!(detailed, "Misty Hollow, with a crooked bridge");

    let names = executor
        .execute("get_elf_name", &ToolArguments::new().with("count", 2))
        .await
        .expect("elf names should succeed");
    assert_eq!(names, "Elarion, Elarion");

    assert_eq!(
        *calls.lock().expect("calls lock"),
        vec!["location:detailed".to_string(), "elf:2".to_string()]
    );
}

#[tokio::test]
async fn executor_surfaces_argument_errors_with_tool_name() {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let executor = DefaultToolExecutor::new(Arc::new(registry_with_recorder(calls)));

    let error = executor
        .execute(
            "get_location_description",
            &ToolArguments::new().with("style", "poetic"),
        )
        .await
        .expect_err("unknown style should fail");

    assert_eq!(error.kind, ToolErrorKind::InvalidArguments);
    assert!(error.is_caller_error());
    assert_eq!(error.tool_name.as_deref(), Some("get_location_description"));
    assert!(error.to_string().contains("unknown style 'poetic'"));
}

#[test]
fn executor_advertises_registry_descriptors() {
    let executor = DefaultToolExecutor::new(Arc::new(registry_with_recorder(Arc::new(
        Mutex::new(Vec::new()),
    ))));

    let usages = executor
        .descriptors()
        .into_iter()
        .map(|descriptor| descriptor.usage)
        .collect::<Vec<_>>();

    assert_eq!(
        usages,
        vec![
            "get_elf_name(count=1)".to_string(),
            "get_location_description(style='brief')".to_string(),
        ]
    );
}
