use std::env;
use std::error::Error;
use std::fs;
use std::io::Read;

use log::debug;

use tarif_parser::model::StoredRecipe;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let path = args
        .get(1)
        .ok_or("Usage: tarif-parser <file|-> [servings original-servings]")?;

    let text = if path == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        fs::read_to_string(path)?
    };

    let recipe = tarif_parser::parse_recipe_text(&text)
        .ok_or("Could not parse the recipe: check the \"Malzemeler:\" and \"Yapılış:\" lines")?;
    debug!("{:#?}", recipe);

    let mut stored = StoredRecipe::from(recipe);

    // Optional rescale for a different serving count
    if let (Some(current), Some(original)) = (args.get(2), args.get(3)) {
        let current: f64 = current.parse()?;
        let original: f64 = original.parse()?;
        stored.ingredients =
            tarif_parser::scale_ingredients(&stored.ingredients, current, original);
        stored.servings = Some(current as u32);
    }

    println!("{}", serde_json::to_string_pretty(&stored)?);

    Ok(())
}
