use super::*;

#[tokio::test]
async fn healthz_returns_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[test]
fn pkg_dir_joins_site_root() {
    assert_eq!(pkg_dir(Path::new("target/site"), "pkg"), PathBuf::from("target/site/pkg"));
}

#[test]
fn health_routes_build_without_leptos_config() {
    let _router: Router = health_routes();
}
