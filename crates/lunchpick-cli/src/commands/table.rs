use anyhow::Result;

use lunchpick_core::view::SortKey;

use super::{load_usecase, maps_link};

/// Shows one page of the restaurant table with the requested view state.
pub async fn run(
    search: Option<String>,
    sort_by: Option<SortKey>,
    desc: bool,
    page: usize,
) -> Result<()> {
    let usecase = load_usecase().await?;

    if let Some(term) = search {
        usecase.set_search(term).await;
    }
    if let Some(key) = sort_by {
        usecase.toggle_sort(key).await;
        if desc {
            usecase.toggle_sort(key).await;
        }
    }
    usecase.set_page(page).await;

    let rows = usecase.visible_page().await;
    if rows.is_empty() {
        println!("No restaurants match.");
        return Ok(());
    }

    for row in &rows {
        let reviews = row.reviews.as_deref().unwrap_or("-");
        let cost = row.cost.as_deref().unwrap_or("-");
        let time = row.time.as_deref().unwrap_or("-");
        println!(
            "{:<24} {:<12} {:<10} {:<8} picked {:>3}  {} [{}]",
            row.name,
            reviews,
            row.cuisine,
            cost,
            row.times_picked,
            time,
            maps_link(&row.address),
        );
    }

    let view = usecase.view().await;
    println!(
        "\npage {} of {}",
        view.page,
        usecase.page_count().await
    );

    Ok(())
}
