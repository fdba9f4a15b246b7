use anyhow::Result;

use super::{load_usecase, maps_link, reviews_label};

/// Picks a venue and prints the result card.
pub async fn run() -> Result<()> {
    let usecase = load_usecase().await?;
    let picked = usecase.pick().await?;

    println!("{}", picked.name);
    println!("  {}", reviews_label(&picked));
    println!("  Cuisine: {}", picked.cuisine);
    if let Some(cost) = &picked.cost {
        println!("  Cost:    {cost}");
    }
    println!("  Address: {}", picked.address);
    if let Some(time) = &picked.time {
        println!("  Hours:   {time}");
    }
    println!("  Picked:  {} time(s)", picked.times_picked);
    println!("  Map:     {}", maps_link(&picked.address));

    Ok(())
}
