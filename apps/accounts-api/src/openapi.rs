use utoipa::OpenApi;

/// Top-level API documentation; domain docs are nested under their prefix
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Accounts API",
        description = "Institutional account registration and lookup"
    ),
    servers((url = "/api")),
    components(schemas(axum_helpers::ErrorResponse)),
    nest(
        (path = "/accounts", api = domain_accounts::ApiDoc)
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_paths_are_nested() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        assert!(paths.iter().any(|p| p.as_str() == "/accounts"));
        assert!(paths.iter().any(|p| p.as_str() == "/accounts/{id}"));
    }

    #[test]
    fn test_create_role_documents_enum() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let schemas = &doc["components"]["schemas"];

        let role = schemas["CreateAccount"]["properties"]["role"].to_string();
        assert!(role.contains("#/components/schemas/Role"), "role schema: {role}");
        assert_eq!(schemas["Role"]["enum"], serde_json::json!(["admin", "user"]));
    }
}
