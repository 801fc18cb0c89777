use tarif_parser::model::StoredRecipe;
use tarif_parser::parse_recipe_text;

#[test]
fn test_parsed_recipe_converts_to_stored_shape() {
    let text = "\
Mercimek Çorbası
Malzemeler:
1 su bardağı kırmızı mercimek
Tuz
Yapılış:
1. Mercimekleri yıkayın.
2. Haşlayın.
";
    let recipe = parse_recipe_text(text).unwrap();
    let stored = StoredRecipe::from(recipe);

    assert_eq!(stored.title, "Mercimek Çorbası");

    // The parser keeps the unit inside the amount string; the separate unit
    // column stays empty
    assert_eq!(stored.ingredients[0].name, "kırmızı mercimek");
    assert_eq!(stored.ingredients[0].amount, "1 su bardağı");
    assert_eq!(stored.ingredients[0].unit, "");
    assert_eq!(stored.ingredients[1].name, "Tuz");
    assert_eq!(stored.ingredients[1].amount, "");

    // Instruction index becomes the stored step number
    assert_eq!(stored.instructions[0].step, 1);
    assert_eq!(stored.instructions[0].text, "Mercimekleri yıkayın.");
    assert_eq!(stored.instructions[1].step, 2);

    assert_eq!(stored.servings, None);
}

#[test]
fn test_stored_recipe_json_shape() {
    let text = "Omlet\nMalzemeler:\n2 yumurta\nYapılış:\nÇırpıp pişirin.";
    let stored = StoredRecipe::from(parse_recipe_text(text).unwrap());

    let json = serde_json::to_value(&stored).unwrap();
    assert_eq!(json["title"], "Omlet");
    assert_eq!(json["ingredients"][0]["name"], "yumurta");
    assert_eq!(json["ingredients"][0]["amount"], "2");
    assert_eq!(json["instructions"][0]["step"], 1);
    // Absent serving count is omitted entirely
    assert!(json.get("servings").is_none());
}
