//! Seed data for first-run population and tests.

use chrono::{DateTime, Utc};

use crate::ids::RecipeId;

use super::{Ingredient, Recipe, Step, Unit, UserProfile};

/// The two demo community members.
pub fn seed_profiles() -> Vec<UserProfile> {
    vec![
        UserProfile::new("user1", "小厨张"),
        UserProfile::new("user2", "美食李"),
    ]
}

/// A small starter collection, used when the persistence slot is empty.
pub fn sample_recipes(now: DateTime<Utc>) -> Vec<Recipe> {
    let mut tomato_egg = Recipe::new("user1".into(), "番茄炒蛋", "酸甜开胃，家常必备", now);
    tomato_egg.id = RecipeId::from("r1");
    tomato_egg.style = "家常菜".to_string();
    tomato_egg.duration = "15分钟".to_string();
    tomato_egg.ingredients = vec![
        Ingredient::new("番茄", "2", Unit::Piece),
        Ingredient::new("鸡蛋", "3", Unit::Piece),
        Ingredient::new("盐", "", Unit::ToTaste),
    ];
    tomato_egg.steps = vec![
        Step::new("番茄切块，鸡蛋打散"),
        Step::new("热油炒蛋至定型，盛出"),
        Step::new("下番茄炒出汁，回锅鸡蛋翻匀"),
    ];

    let mut braised_ribs = Recipe::new("user1".into(), "红烧排骨", "色泽红亮，软烂入味", now);
    braised_ribs.id = RecipeId::from("r2");
    braised_ribs.style = "家常菜".to_string();
    braised_ribs.duration = "60分钟".to_string();
    braised_ribs.ingredients = vec![
        Ingredient::new("排骨", "500", Unit::G),
        Ingredient::new("冰糖", "20", Unit::G),
        Ingredient::new("生抽", "2", Unit::Spoon),
    ];
    braised_ribs.steps = vec![
        Step::new("排骨冷水下锅焯水"),
        Step::new("炒糖色，下排骨上色"),
        Step::new("加水没过排骨，小火炖四十分钟"),
        Step::new("大火收汁"),
    ];

    let mut cucumber = Recipe::new("user2".into(), "凉拌黄瓜", "清爽解腻", now);
    cucumber.id = RecipeId::from("r3");
    cucumber.style = "凉菜".to_string();
    cucumber.duration = "10分钟".to_string();
    cucumber.ingredients = vec![
        Ingredient::new("黄瓜", "2", Unit::Piece),
        Ingredient::new("蒜末", "1", Unit::Spoon),
        Ingredient::new("香醋", "1", Unit::Spoon),
    ];
    cucumber.steps = vec![Step::new("黄瓜拍碎切段"), Step::new("加蒜末香醋拌匀")];

    vec![tomato_egg, braised_ribs, cucumber]
}
