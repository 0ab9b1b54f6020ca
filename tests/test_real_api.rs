use recipe_browser::{fetch_page, fetch_recipe, PAGE_SIZE};

/// This test is ignored by default since it requires network access
#[tokio::test]
#[ignore]
async fn test_fetch_first_page_from_dummyjson() {
    let page = fetch_page(1).await.unwrap();

    assert_eq!(page.recipes.len(), PAGE_SIZE as usize);
    assert_eq!(page.skip, 0);
    assert!(page.total > PAGE_SIZE);
}

/// This test is ignored by default since it requires network access
#[tokio::test]
#[ignore]
async fn test_fetch_recipe_from_dummyjson() {
    let recipe = fetch_recipe(1).await.unwrap();

    assert_eq!(recipe.id, 1);
    assert!(!recipe.name.is_empty());
    assert!(!recipe.instructions.is_empty());
}
