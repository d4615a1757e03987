//! The catalog loaded into an empty `menu_items` table

use rusqlite::{params, Connection};

use crate::error::StorageResult;

/// One catalog entry; prices are whole rupees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MenuSeed {
    pub name: &'static str,
    pub description: &'static str,
    pub price: u32,
    pub category: &'static str,
    pub is_veg: bool,
    pub is_vegan: bool,
    pub is_spicy: bool,
    pub is_bestseller: bool,
}

const fn item(
    name: &'static str,
    description: &'static str,
    price: u32,
    category: &'static str,
    flags: [bool; 4],
) -> MenuSeed {
    MenuSeed {
        name,
        description,
        price,
        category,
        is_veg: flags[0],
        is_vegan: flags[1],
        is_spicy: flags[2],
        is_bestseller: flags[3],
    }
}

// flags: [veg, vegan, spicy, bestseller]
pub const SEED_MENU: [MenuSeed; 29] = [
    item("Masala Dosa", "Crispy rice crepe filled with spiced potato, served with sambar & chutneys", 199, "Breakfast", [true, true, false, true]),
    item("Plain Dosa", "Thin crispy rice & lentil crepe with sambar & chutneys", 149, "Breakfast", [true, true, false, false]),
    item("Idli Sambar", "Steamed rice cakes (3 pcs) with sambar & coconut chutney", 149, "Breakfast", [true, true, false, true]),
    item("Medu Vada", "Crispy lentil donuts (3 pcs) with sambar & chutney", 169, "Breakfast", [true, true, false, false]),
    item("Uttapam", "Thick rice pancake topped with onions, tomatoes & chilies", 199, "Breakfast", [true, true, false, false]),
    item("Pongal", "Creamy rice & lentil porridge tempered with pepper & cumin", 179, "Breakfast", [true, false, false, false]),
    item("Upma", "Semolina cooked with vegetables & spices", 149, "Breakfast", [true, true, false, false]),
    item("Chettinad Chicken Curry", "Fiery chicken curry with freshly ground spices", 399, "Main Course", [false, false, true, true]),
    item("Hyderabadi Biryani", "Fragrant basmati rice layered with spiced meat & saffron", 349, "Main Course", [false, false, true, true]),
    item("Vegetable Biryani", "Aromatic basmati rice with seasonal vegetables", 279, "Main Course", [true, true, false, false]),
    item("Paneer Tikka Masala", "Cottage cheese in creamy tomato-spice gravy", 329, "Main Course", [true, false, false, false]),
    item("Fish Moilee", "Kerala-style fish in coconut milk & turmeric sauce", 429, "Main Course", [false, false, false, false]),
    item("Sambar Rice", "Lentil stew with vegetables served over steamed rice", 229, "Main Course", [true, true, false, false]),
    item("Rasam Rice", "Tangy tamarind-pepper soup with rice & papad", 199, "Main Course", [true, true, false, false]),
    item("Sarovar Special Thali", "Complete meal: rice, sambar, rasam, 2 curries, curd, papad, dessert", 499, "Main Course", [true, false, false, true]),
    item("Bajji Platter", "Assorted vegetable fritters with mint chutney", 199, "Snacks", [true, true, false, false]),
    item("Chicken 65", "Spicy deep-fried chicken bites, Hyderabad style", 299, "Snacks", [false, false, true, true]),
    item("Mysore Bonda", "Crispy fried lentil balls with coconut chutney", 179, "Snacks", [true, true, false, false]),
    item("Paneer Pakora", "Cottage cheese fritters with spiced batter", 249, "Snacks", [true, false, false, false]),
    item("Filter Coffee", "Traditional South Indian drip coffee with chicory", 99, "Beverages", [true, false, false, true]),
    item("Masala Chai", "Spiced tea with cardamom, ginger & cinnamon", 79, "Beverages", [true, false, false, false]),
    item("Mango Lassi", "Sweet yogurt drink blended with mango pulp", 149, "Beverages", [true, false, false, true]),
    item("Buttermilk", "Spiced churned yogurt drink (Neer Mor)", 79, "Beverages", [true, false, false, false]),
    item("Rose Milk", "Chilled milk infused with rose syrup", 99, "Beverages", [true, false, false, false]),
    item("Fresh Lime Soda", "Freshly squeezed lime with soda", 89, "Beverages", [true, true, false, false]),
    item("Gulab Jamun", "Deep-fried milk dumplings in rose-cardamom syrup (2 pcs)", 149, "Desserts", [true, false, false, true]),
    item("Payasam", "South Indian rice pudding with cashews & raisins", 179, "Desserts", [true, false, false, false]),
    item("Mysore Pak", "Ghee-rich gram flour fudge", 149, "Desserts", [true, false, false, false]),
    item("Rava Kesari", "Semolina halwa with saffron, ghee & dry fruits", 149, "Desserts", [true, false, false, false]),
];

/// Insert the catalog; returns the number of rows written
pub fn seed_menu(conn: &Connection) -> StorageResult<usize> {
    let mut stmt = conn.prepare(
        "INSERT INTO menu_items (name, description, price, category, is_veg, is_vegan, is_spicy, is_bestseller)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
    )?;

    for seed in SEED_MENU.iter() {
        stmt.execute(params![
            seed.name,
            seed.description,
            f64::from(seed.price),
            seed.category,
            seed.is_veg,
            seed.is_vegan,
            seed.is_spicy,
            seed.is_bestseller,
        ])?;
    }

    Ok(SEED_MENU.len())
}
