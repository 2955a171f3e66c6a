//! Fetch the content document once and normalize it.

use content::{normalize, ContentError, ResumeDocument, ResumeViewModel};

/// Load the document at `path` and build the view model.
///
/// The error is logged here; callers only decide what to render.
pub async fn load_resume(path: &str) -> Result<ResumeViewModel, ContentError> {
    let result = fetch_document(path)
        .await
        .and_then(|body| ResumeDocument::from_json(path, &body));
    match result {
        Ok(doc) => {
            let vm = normalize(&doc);
            tracing::info!(
                "Loaded {path}: {} role(s), {} nav item(s)",
                vm.experience.len(),
                vm.nav.len()
            );
            Ok(vm)
        }
        Err(e) => {
            tracing::error!("Failed to load resume: {e}");
            Err(e)
        }
    }
}

#[cfg(target_arch = "wasm32")]
async fn fetch_document(path: &str) -> Result<String, ContentError> {
    use dioxus::prelude::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    #[serde(tag = "status", rename_all = "lowercase")]
    enum FetchReply {
        Ok { body: String },
        Http { code: u16 },
        Network { message: String },
    }

    let js = format!(
        r#"(async function() {{
            try {{
                var res = await fetch({path_js}, {{ cache: 'no-cache' }});
                if (!res.ok) {{
                    dioxus.send({{ status: 'http', code: res.status }});
                    return;
                }}
                dioxus.send({{ status: 'ok', body: await res.text() }});
            }} catch (e) {{
                dioxus.send({{ status: 'network', message: String(e) }});
            }}
        }})();"#,
        path_js = crate::js_string(path),
    );

    let mut eval = document::eval(&js);
    match eval.recv::<FetchReply>().await {
        Ok(FetchReply::Ok { body }) => Ok(body),
        Ok(FetchReply::Http { code }) => Err(ContentError::Status {
            path: path.to_string(),
            status: code,
        }),
        Ok(FetchReply::Network { message }) => Err(ContentError::Network {
            path: path.to_string(),
            message,
        }),
        Err(e) => Err(ContentError::Network {
            path: path.to_string(),
            message: e.to_string(),
        }),
    }
}

#[cfg(not(target_arch = "wasm32"))]
async fn fetch_document(path: &str) -> Result<String, ContentError> {
    std::fs::read_to_string(path).map_err(|source| ContentError::Io {
        path: path.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_document_names_path() {
        let err = load_resume("no/such/resume.json").await.unwrap_err();
        assert!(matches!(err, ContentError::Io { .. }));
        assert_eq!(err.path(), "no/such/resume.json");
    }

    #[tokio::test]
    async fn test_sample_document_loads() {
        let vm = load_resume("../web/public/content/resume.json").await.unwrap();
        assert_eq!(vm.meta.role, "Staff Software Engineer");
        assert_eq!(vm.nav.len(), 2);
        assert_eq!(vm.contact.email_href, "mailto:andrew@example.com");
    }
}
