//! OpenAPI 文档
//!
//! `GET /api-docs` 返回描述员工接口的 OpenAPI 3 JSON 文档，
//! 服务地址取自 `PUBLIC_URL`。

use axum::{Json, Router, extract::State, routing::get};
use serde_json::{Value, json};

use crate::core::ServerState;

pub const TITLE: &str = "Employee Manager";
pub const DESCRIPTION: &str = "An app to manage employees in a company";

pub fn router() -> Router<ServerState> {
    Router::new().route("/api-docs", get(api_docs))
}

async fn api_docs(State(state): State<ServerState>) -> Json<Value> {
    Json(openapi(&state.config.public_url))
}

fn employee_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "_id": { "type": "string", "readOnly": true },
            "name": { "type": "string", "nullable": true },
            "position": { "type": "string", "nullable": true },
            "office": { "type": "string", "nullable": true },
            "salary": { "type": "number", "nullable": true }
        }
    })
}

/// Build the OpenAPI document for a given server URL
pub fn openapi(server_url: &str) -> Value {
    let id_param = json!({
        "name": "id",
        "in": "path",
        "required": true,
        "schema": { "type": "string" }
    });
    let employee_ref = json!({ "$ref": "#/components/schemas/Employee" });
    let one = json!({
        "description": "The employee record, or an empty body when none matches",
        "content": { "application/json": { "schema": employee_ref } }
    });
    let bad_id = json!({
        "description": "Malformed id",
        "content": { "text/plain": { "schema": { "type": "string" } } }
    });
    let store_error = json!({ "description": "Database error" });
    let body = json!({
        "required": true,
        "content": { "application/json": { "schema": employee_ref } }
    });

    json!({
        "openapi": "3.0.3",
        "info": {
            "title": TITLE,
            "description": DESCRIPTION,
            "version": env!("CARGO_PKG_VERSION")
        },
        "servers": [{ "url": server_url }],
        "paths": {
            "/employees": {
                "get": {
                    "summary": "List all employees",
                    "responses": {
                        "200": {
                            "description": "All employees",
                            "content": {
                                "application/json": {
                                    "schema": { "type": "array", "items": employee_ref }
                                }
                            }
                        },
                        "500": store_error
                    }
                },
                "post": {
                    "summary": "Create an employee",
                    "requestBody": body,
                    "responses": { "200": one, "500": store_error }
                }
            },
            "/employees/{id}": {
                "parameters": [id_param],
                "get": {
                    "summary": "Get an employee by id",
                    "responses": { "200": one, "400": bad_id, "500": store_error }
                },
                "put": {
                    "summary": "Replace an employee",
                    "requestBody": body,
                    "responses": { "200": one, "400": bad_id, "500": store_error }
                },
                "delete": {
                    "summary": "Delete an employee",
                    "responses": { "200": one, "400": bad_id, "500": store_error }
                }
            }
        },
        "components": {
            "schemas": { "Employee": employee_schema() }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_employee_operations() {
        let doc = openapi("http://localhost:3000");
        assert_eq!(doc["info"]["title"], TITLE);
        assert_eq!(doc["servers"][0]["url"], "http://localhost:3000");

        let paths = &doc["paths"];
        for method in ["get", "post"] {
            assert!(paths["/employees"][method].is_object());
        }
        for method in ["get", "put", "delete"] {
            assert!(paths["/employees/{id}"][method].is_object());
        }
        assert!(paths["/employees/{id}"]["get"]["responses"]["400"].is_object());
    }
}
