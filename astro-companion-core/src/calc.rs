//! Derived quantities and the fixed comparison/task dispatch tables.
//!
//! Density and volume are computed live from parsed catalogue values; the
//! four comparison narratives and five task walk-throughs are pre-authored
//! content with literal figures, kept as variants of explicit enums so the
//! dispatch stays exhaustiveness-checked.

use serde::Serialize;
use thiserror::Error;

use crate::catalogue::{CatalogueStore, CelestialRecord};
use crate::parse::{parse_scientific, ParsedQuantity};

pub const DENSITY_FORMULA: &str = "ρ = 3M/(4πR³)";

/// Result of one volume/density computation.
#[derive(Debug, Clone, Serialize)]
pub struct DensityResult {
    pub mass_kg: f64,
    pub radius_m: f64,
    pub volume_m3: f64,
    pub density_kg_m3: f64,
    pub density_g_cm3: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Radius is zero or negative; the sphere volume is undefined.
    #[error("density is undefined for a non-positive radius")]
    Undefined,
    /// A required input is missing from the record or failed to parse.
    #[error("required quantity unavailable: {0}")]
    Unavailable(String),
}

/// Sphere volume and density for explicit SI inputs.
pub fn density(mass_kg: f64, radius_m: f64) -> Result<DensityResult, CalcError> {
    if radius_m <= 0.0 {
        return Err(CalcError::Undefined);
    }
    let volume_m3 = (4.0 / 3.0) * std::f64::consts::PI * radius_m.powi(3);
    let density_kg_m3 = mass_kg / volume_m3;
    Ok(DensityResult {
        mass_kg,
        radius_m,
        volume_m3,
        density_kg_m3,
        density_g_cm3: density_kg_m3 / 1000.0,
    })
}

/// Density for a catalogued body, parsing its mass and radius strings.
pub fn density_for_body(store: &CatalogueStore, name: &str) -> Result<DensityResult, CalcError> {
    let (canonical, record) = store
        .lookup(name)
        .ok_or_else(|| CalcError::Unavailable(name.to_string()))?;
    density_for_record(canonical, record)
}

pub fn density_for_record(name: &str, record: &CelestialRecord) -> Result<DensityResult, CalcError> {
    let mass = parse_field(name, "mass", record.mass.as_deref())?;
    let radius = parse_field(name, "radius", record.radius.as_deref())?;
    density(mass.value, radius.value)
}

fn parse_field(name: &str, field: &str, value: Option<&str>) -> Result<ParsedQuantity, CalcError> {
    let raw = value.ok_or_else(|| CalcError::Unavailable(format!("{}: {}", name, field)))?;
    parse_scientific(raw).map_err(|_| CalcError::Unavailable(format!("{}: {}", name, field)))
}

/// A numeric field two records can be compared on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareField {
    Mass,
    Radius,
    Density,
}

/// Two parsed values of the same field plus their ratio (first / second).
#[derive(Debug, Clone, Serialize)]
pub struct FieldComparison {
    pub first: f64,
    pub second: f64,
    pub ratio: f64,
}

pub fn compare_field(
    first: (&str, &CelestialRecord),
    second: (&str, &CelestialRecord),
    field: CompareField,
) -> Result<FieldComparison, CalcError> {
    let (name_a, a) = first;
    let (name_b, b) = second;
    let (value_a, value_b) = match field {
        CompareField::Mass => (
            parse_field(name_a, "mass", a.mass.as_deref())?.value,
            parse_field(name_b, "mass", b.mass.as_deref())?.value,
        ),
        CompareField::Radius => (
            parse_field(name_a, "radius", a.radius.as_deref())?.value,
            parse_field(name_b, "radius", b.radius.as_deref())?.value,
        ),
        CompareField::Density => (
            density_for_record(name_a, a)?.density_kg_m3,
            density_for_record(name_b, b)?.density_kg_m3,
        ),
    };
    Ok(FieldComparison {
        first: value_a,
        second: value_b,
        ratio: value_a / value_b,
    })
}

/// The four comparison pairs the compare picker offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComparisonPair {
    EarthMars,
    VenusEarth,
    JupiterSaturn,
    SunSirius,
}

impl ComparisonPair {
    pub fn all() -> [Self; 4] {
        [
            Self::EarthMars,
            Self::VenusEarth,
            Self::JupiterSaturn,
            Self::SunSirius,
        ]
    }

    /// Resolves an ordered name pair to its comparison, if it is one of the
    /// four offered.
    pub fn from_names(first: &str, second: &str) -> Option<Self> {
        Self::all()
            .into_iter()
            .find(|pair| pair.names() == (first, second))
    }

    pub fn names(self) -> (&'static str, &'static str) {
        match self {
            Self::EarthMars => ("Земля", "Марс"),
            Self::VenusEarth => ("Венера", "Земля"),
            Self::JupiterSaturn => ("Юпитер", "Сатурн"),
            Self::SunSirius => ("Солнце", "Сириус"),
        }
    }

    /// Whether the comparison screen shows live computed densities for this
    /// pair (the stellar pair compares luminosities instead).
    pub fn computes_density(self) -> bool {
        !matches!(self, Self::SunSirius)
    }

    /// The pre-authored narrative block with its literal figures.
    pub fn narrative(self) -> &'static str {
        match self {
            Self::EarthMars => NARRATIVE_EARTH_MARS,
            Self::VenusEarth => NARRATIVE_VENUS_EARTH,
            Self::JupiterSaturn => NARRATIVE_JUPITER_SATURN,
            Self::SunSirius => NARRATIVE_SUN_SIRIUS,
        }
    }
}

/// The five pre-authored problem walk-throughs behind the task picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKind {
    Velocity,
    Mass,
    Gravity,
    Period,
    Stars,
}

impl TaskKind {
    pub fn all() -> [Self; 5] {
        [
            Self::Velocity,
            Self::Mass,
            Self::Gravity,
            Self::Period,
            Self::Stars,
        ]
    }

    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "velocity" => Some(Self::Velocity),
            "mass" => Some(Self::Mass),
            "gravity" => Some(Self::Gravity),
            "period" => Some(Self::Period),
            "stars" => Some(Self::Stars),
            _ => None,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            Self::Velocity => "velocity",
            Self::Mass => "mass",
            Self::Gravity => "gravity",
            Self::Period => "period",
            Self::Stars => "stars",
        }
    }

    /// The full pre-authored statement and worked solution.
    pub fn solution(self) -> &'static str {
        match self {
            Self::Velocity => TASK_VELOCITY,
            Self::Mass => TASK_MASS,
            Self::Gravity => TASK_GRAVITY,
            Self::Period => TASK_PERIOD,
            Self::Stars => TASK_STARS,
        }
    }
}

const NARRATIVE_EARTH_MARS: &str = "\
📝 **Сравнение силы тяжести:**
g_Земля = 9.81 м/с²
g_Марс = 3.71 м/с²
Отношение: g_Марс/g_Земля = 3.71/9.81 ≈ 0.38

📐 **Формула сравнения:** g₁/g₂ = (M₁/M₂) × (R₂²/R₁²)

🎯 **Вывод:** Сила тяжести на Марсе составляет ~38% от земной";

const NARRATIVE_VENUS_EARTH: &str = "\
📝 **Сравнение силы тяжести:**
g_Венера = 8.87 м/с²
g_Земля = 9.81 м/с²
Отношение: g_Венера/g_Земля = 8.87/9.81 ≈ 0.904

📐 **Формула сравнения:** g = GM/R²

🎯 **Вывод:** Сила тяжести на Венере ~90% от земной, несмотря на близкие размеры";

const NARRATIVE_JUPITER_SATURN: &str = "\
📝 **Сравнение плотности:**
ρ_Юпитер = 1.33 г/см³
ρ_Сатурн = 0.69 г/см³
Отношение: ρ_Юпитер/ρ_Сатурн ≈ 1.93

📐 **Формула:** ρ = 3M/(4πR³)

🎯 **Вывод:** Юпитер почти в 2 раза плотнее Сатурна";

const NARRATIVE_SUN_SIRIUS: &str = "\
📝 **Сравнение светимости:**
L_Солнце = 1 L☉
L_Сириус = 25.4 L☉
Отношение: L_Сириус/L_Солнце = 25.4

📐 **Формула:** L ∝ M³·⁵ (зависимость масса-светимость для главной последовательности)

🎯 **Вывод:** Сириус в 25.4 раза ярче Солнца";

const TASK_VELOCITY: &str = "\
🚀 **ЗАДАЧА: Космические скорости Марса**

📝 **Условие:**
Вычислите первую и вторую космические скорости для Марса.

📐 **Формулы:**
1. Первая космическая скорость (круговая орбита):
   v₁ = √(GM/R)
2. Вторая космическая скорость (параболическая):
   v₂ = √(2GM/R) = v₁√2

🔢 **Данные для Марса:**
- G = 6.67430×10⁻¹¹ м³/(кг·с²)
- M_Марс = 6.4171×10²³ кг
- R_Марс = 3.3895×10⁶ м

📝 **Решение:**
1. **Первая космическая скорость:**
   v₁ = √(6.67430×10⁻¹¹ × 6.4171×10²³ / 3.3895×10⁶)
   v₁ = √(1.264×10⁷) ≈ 3.56×10³ м/с

2. **Вторая космическая скорость:**
   v₂ = √(2) × v₁ = 1.414 × 3.56×10³ ≈ 5.03×10³ м/с

🎯 **Ответы:**
- Первая космическая скорость Марса: **~3.56 км/с**
- Вторая космическая скорость Марса: **~5.03 км/с**

📊 **Сравнение с Землей:**
- Земля: v₁ = 7.91 км/с, v₂ = 11.2 км/с
- Марс в 2.2 раза легче удержать на орбите!";

const TASK_MASS: &str = "\
⚖️ **ЗАДАЧА: Сравнение масс планет-гигантов**

📝 **Условие:**
Во сколько раз масса Юпитера больше массы Сатурна?

📐 **Формула сравнения масс:**
N = M₁/M₂

🔢 **Данные:**
- M_Юпитер = 1.8982×10²⁷ кг
- M_Сатурн = 5.6834×10²⁶ кг

📝 **Решение:**
N = M_Юпитер / M_Сатурн
N = 1.8982×10²⁷ / 5.6834×10²⁶
N = 3.339

🎯 **Ответ:**
Юпитер в **3.34 раза** массивнее Сатурна

📊 **Распределение массы в Солнечной системе:**
- Солнце: 99.86%
- Юпитер: 0.10%
- Остальные планеты: 0.04%";

const TASK_GRAVITY: &str = "\
🌍 **ЗАДАЧА: Сила тяжести на планетах земной группы**

📝 **Условие:**
Рассчитайте ускорение свободного падения на Венере.

📐 **Формула:**
g = GM/R²

🔢 **Данные для Венеры:**
- M_Венера = 4.8675×10²⁴ кг
- R_Венера = 6.0518×10⁶ м
- M_Земля = 5.9722×10²⁴ кг
- R_Земля = 6.371×10⁶ м

📝 **Решение:**
1. **Ускорение на Венере:**
   g_В = (6.67430×10⁻¹¹ × 4.8675×10²⁴) / (6.0518×10⁶)²
   g_В ≈ 8.87 м/с²

2. **Ускорение на Земле:**
   g_З = (6.67430×10⁻¹¹ × 5.9722×10²⁴) / (6.371×10⁶)²
   g_З ≈ 9.82 м/с²

3. **Сравнение:**
   g_В / g_З = 8.87 / 9.82 ≈ 0.903

🎯 **Ответы:**
- Ускорение на Венере: **8.87 м/с²**
- На Земле: **9.82 м/с²**
- Отношение: **~0.90** (90% от земного)";

const TASK_PERIOD: &str = "\
🔄 **ЗАДАЧА: Орбитальные и синодические периоды**

📝 **Условие:** Определите синодический период Венеры.

📐 **Формула:**
1/S = 1/T₁ - 1/T₂

🔢 **Данные:**
- T_Венера = 224.7 дней
- T_Земля = 365.25 дней

📝 **Решение:**
1/S = 1/224.7 - 1/365.25
1/S = 0.004451 - 0.002738 = 0.001713
S = 1/0.001713 ≈ 583.8 дней

🎯 **Ответ:** Синодический период Венеры **~584 дня**

📊 **Таблица периодов (дни):**
- Меркурий: 87.97 (сид.), 115.9 (синод.)
- Венера: 224.7 (сид.), 583.9 (синод.)
- Земля: 365.25
- Марс: 687.0 (сид.), 779.9 (синод.)";

const TASK_STARS: &str = "\
⭐️ **ЗАДАЧА: Звездные характеристики Сириуса**

📝 **Условие:** Во сколько раз Сириус ярче Солнца?

🔢 **Данные:**
- L_Сириус = 25.4 L☉
- L_Солнце = 1 L☉

📝 **Решение:**
N = L_Сириус / L_Солнце = 25.4 / 1 = 25.4

🎯 **Ответ:** Сириус в **25.4 раза** ярче Солнца

📊 **Характеристики Сириуса:**
- Расстояние: 8.6 св. лет
- Температура: 9940 K
- Спектральный класс: A1V
- Возраст: ~200-300 млн лет";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::{seed_defaults, CatalogueStore};

    fn seeded_store() -> CatalogueStore {
        CatalogueStore::from_data("unused.json", seed_defaults())
    }

    #[test]
    fn earth_density_matches_the_reference_figure() {
        let result = density(5.9722e24, 6.371e6).unwrap();
        assert!((result.density_kg_m3 - 5514.0).abs() < 2.0, "got {}", result.density_kg_m3);
        assert!((result.density_g_cm3 - 5.51).abs() < 0.01, "got {}", result.density_g_cm3);
    }

    #[test]
    fn density_is_undefined_for_non_positive_radius() {
        assert_eq!(density(5.9722e24, 0.0).unwrap_err(), CalcError::Undefined);
        assert_eq!(density(5.9722e24, -1.0).unwrap_err(), CalcError::Undefined);
    }

    #[test]
    fn catalogue_densities_agree_with_the_closed_form() {
        let store = seeded_store();
        for name in [
            "Солнце", "Меркурий", "Венера", "Земля", "Марс", "Юпитер", "Сатурн", "Уран",
            "Нептун",
        ] {
            let result = density_for_body(&store, name).unwrap();
            let expected = result.mass_kg
                / ((4.0 / 3.0) * std::f64::consts::PI * result.radius_m.powi(3));
            let relative = ((result.density_kg_m3 - expected) / expected).abs();
            assert!(result.density_kg_m3 > 0.0, "non-positive density for {}", name);
            assert!(relative < 1e-9, "density drift for {}: {}", name, relative);
        }
    }

    #[test]
    fn unknown_body_is_unavailable() {
        let store = seeded_store();
        assert!(matches!(
            density_for_body(&store, "Плутон"),
            Err(CalcError::Unavailable(_))
        ));
    }

    #[test]
    fn jupiter_saturn_density_ratio_matches_the_narrative() {
        let store = seeded_store();
        let (key_j, jupiter) = store.lookup("Юпитер").unwrap();
        let (key_s, saturn) = store.lookup("Сатурн").unwrap();
        let comparison =
            compare_field((key_j, jupiter), (key_s, saturn), CompareField::Density).unwrap();
        assert!(
            (comparison.ratio - 1.93).abs() < 0.05,
            "ratio {} drifted from the narrative figure",
            comparison.ratio
        );
        assert!(ComparisonPair::JupiterSaturn.narrative().contains("1.93"));
    }

    #[test]
    fn venus_earth_mass_ratio_matches_the_solution_text() {
        let store = seeded_store();
        let (key_v, venus) = store.lookup("Венера").unwrap();
        let (key_e, earth) = store.lookup("Земля").unwrap();
        let comparison =
            compare_field((key_v, venus), (key_e, earth), CompareField::Mass).unwrap();
        assert!((comparison.ratio - 0.815).abs() < 0.001, "got {}", comparison.ratio);
    }

    #[test]
    fn comparison_pairs_resolve_only_in_listed_order() {
        assert_eq!(
            ComparisonPair::from_names("Земля", "Марс"),
            Some(ComparisonPair::EarthMars)
        );
        assert_eq!(ComparisonPair::from_names("Марс", "Земля"), None);
        assert_eq!(ComparisonPair::from_names("Земля", "Венера"), None);
    }

    #[test]
    fn task_ids_round_trip() {
        for task in TaskKind::all() {
            assert_eq!(TaskKind::from_id(task.id()), Some(task));
        }
        assert_eq!(TaskKind::from_id("quantum"), None);
    }
}
