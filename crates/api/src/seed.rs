//! Fixed catalog data the mock server boots with.
//!
//! Ids are stable so tests and local tooling can refer to them directly.

use imagiq_core::catalog::{Category, Menu, ProductSummary, Submenu};
use imagiq_core::types::Timestamp;

pub const CAT_MOBILE: &str = "cat-mobile";
pub const CAT_TV: &str = "cat-tv";
pub const CAT_APPLIANCES: &str = "cat-appliances";

pub const MENU_SMARTPHONES: &str = "menu-smartphones";
pub const MENU_TABLETS: &str = "menu-tablets";
pub const MENU_WEARABLES: &str = "menu-wearables";
pub const MENU_NEO_QLED: &str = "menu-neo-qled";
pub const MENU_REFRIGERATORS: &str = "menu-refrigerators";

pub const SUB_GALAXY_S: &str = "sub-galaxy-s";
pub const SUB_GALAXY_A: &str = "sub-galaxy-a";
pub const SUB_GALAXY_TAB_S: &str = "sub-galaxy-tab-s";

pub fn categories(now: Timestamp) -> Vec<Category> {
    [
        (CAT_MOBILE, "Dispositivos Móviles", "dispositivos-moviles"),
        (CAT_TV, "Televisores y AV", "televisores"),
        (CAT_APPLIANCES, "Electrodomésticos", "electrodomesticos"),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (id, name, slug))| Category {
        id: id.to_string(),
        name: name.to_string(),
        slug: slug.to_string(),
        description: None,
        image_url: None,
        order: i as u32,
        is_active: true,
        created_at: now,
        updated_at: now,
    })
    .collect()
}

pub fn menus() -> Vec<Menu> {
    [
        (MENU_SMARTPHONES, CAT_MOBILE, "Smartphones", "smartphones"),
        (MENU_TABLETS, CAT_MOBILE, "Tablets", "tablets"),
        (MENU_WEARABLES, CAT_MOBILE, "Relojes", "relojes"),
        (MENU_NEO_QLED, CAT_TV, "Neo QLED", "neo-qled"),
        (MENU_REFRIGERATORS, CAT_APPLIANCES, "Neveras", "neveras"),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (id, category_id, name, slug))| Menu {
        id: id.to_string(),
        category_id: category_id.to_string(),
        name: name.to_string(),
        slug: slug.to_string(),
        order: i as u32,
        is_active: true,
    })
    .collect()
}

pub fn submenus() -> Vec<Submenu> {
    [
        (SUB_GALAXY_S, MENU_SMARTPHONES, "Galaxy S", "galaxy-s"),
        (SUB_GALAXY_A, MENU_SMARTPHONES, "Galaxy A", "galaxy-a"),
        (SUB_GALAXY_TAB_S, MENU_TABLETS, "Galaxy Tab S", "galaxy-tab-s"),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (id, menu_id, name, slug))| Submenu {
        id: id.to_string(),
        menu_id: menu_id.to_string(),
        name: name.to_string(),
        slug: slug.to_string(),
        order: i as u32,
        is_active: true,
    })
    .collect()
}

#[allow(clippy::too_many_arguments)]
fn product(
    id: &str,
    codigo: &str,
    nombre: &str,
    modelo: &str,
    categoria: &str,
    subcategoria: Option<&str>,
    color: &[&str],
    capacidad: &[&str],
    memoriaram: &[&str],
    precio_normal: f64,
    precio_descuento: Option<f64>,
    stock_total: u32,
) -> ProductSummary {
    let owned = |xs: &[&str]| xs.iter().map(|s| s.to_string()).collect::<Vec<_>>();
    ProductSummary {
        id: id.to_string(),
        codigo_market: codigo.to_string(),
        nombre_market: nombre.to_string(),
        modelo: modelo.to_string(),
        categoria: categoria.to_string(),
        subcategoria: subcategoria.map(str::to_string),
        color: owned(color),
        capacidad: owned(capacidad),
        memoriaram: owned(memoriaram),
        precio_normal,
        precio_descuento,
        stock_total,
        disponible: stock_total > 0,
    }
}

pub fn products() -> Vec<ProductSummary> {
    vec![
        product(
            "prod-1", "SM-S921B", "Galaxy S24", "S24", "Smartphones", Some("Galaxy S"),
            &["Negro", "Violeta"], &["256GB"], &["8GB"], 3_999_900.0, Some(3_499_900.0), 14,
        ),
        product(
            "prod-2", "SM-S928B", "Galaxy S24 Ultra", "S24 Ultra", "Smartphones",
            Some("Galaxy S"), &["Negro", "Gris"], &["256GB", "512GB"], &["12GB"],
            6_299_900.0, None, 6,
        ),
        product(
            "prod-3", "SM-A556E", "Galaxy A55", "A55", "Smartphones", Some("Galaxy A"),
            &["Azul", "Negro"], &["128GB"], &["8GB"], 1_699_900.0, Some(1_499_900.0), 32,
        ),
        product(
            "prod-4", "SM-A156M", "Galaxy A15", "A15", "Smartphones", Some("Galaxy A"),
            &["Azul"], &["128GB"], &["4GB"], 799_900.0, None, 0,
        ),
        product(
            "prod-5", "SM-X710", "Galaxy Tab S9", "Tab S9", "Tablets", Some("Galaxy Tab S"),
            &["Gris"], &["128GB", "256GB"], &["8GB"], 3_599_900.0, None, 9,
        ),
        product(
            "prod-6", "SM-L310", "Galaxy Watch6", "Watch6", "Relojes", None,
            &["Plata", "Negro"], &[], &[], 1_199_900.0, Some(999_900.0), 21,
        ),
        product(
            "prod-7", "QN65QN90D", "Neo QLED 65\" QN90D", "QN90D", "Televisores", None,
            &["Negro"], &[], &[], 7_499_900.0, Some(6_499_900.0), 4,
        ),
        product(
            "prod-8", "RF90K5", "Nevera Bespoke 4 puertas", "RF90K5", "Neveras", None,
            &["Blanco", "Plata"], &[], &[], 11_999_900.0, None, 2,
        ),
    ]
}
