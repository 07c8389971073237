//! Text renderers for catalogue records, comparisons and calculation
//! results. Pure functions over already-resolved data.

use crate::calc::{ComparisonPair, DensityResult, FieldComparison, TaskKind, DENSITY_FORMULA};
use crate::catalogue::CelestialRecord;

/// Full reference card for one body: header, classification, the physical
/// parameters that are present, data-quality footer and the attached example
/// problem with its worked solution.
pub fn body_info(name: &str, body: &CelestialRecord) -> String {
    let mut out = String::new();

    if body.name_en.is_empty() {
        out.push_str(&format!("{} *{}*\n\n", body.emoji, name.to_uppercase()));
    } else {
        out.push_str(&format!(
            "{} *{}* ({})\n\n",
            body.emoji,
            name.to_uppercase(),
            body.name_en
        ));
    }
    out.push_str(&format!("📌 *Тип:* {}\n\n", body.kind));

    if let Some(mass) = &body.mass {
        out.push_str(&format!("⚖️ *Масса:* {}\n", mass));
    }
    if let Some(radius) = &body.radius {
        out.push_str(&format!("📏 *Радиус:* {}\n", radius));
    }
    if let Some(distance) = &body.distance {
        out.push_str(&format!("📍 *Расстояние:* {}\n", distance));
    }
    if let Some(period) = &body.period {
        out.push_str(&format!("🔄 *Период обращения:* {}\n", period));
    }
    if let Some(luminosity) = &body.luminosity {
        out.push_str(&format!("☀️ *Светимость:* {}\n", luminosity));
    }
    if let Some(temperature) = &body.temperature {
        out.push_str(&format!("🌡️ *Температура:* {}\n", temperature));
    }

    if let Some(accuracy) = &body.accuracy {
        out.push_str(&format!("\n📊 *Точность:* {}\n", accuracy));
    }
    if let Some(sources) = &body.sources {
        out.push_str(&format!("📚 *Источники:* {}\n", sources));
    }

    if let Some(task) = &body.task {
        out.push_str(&format!("\n🎯 *{}*\n\n", task));
        if let Some(solution) = &body.solution {
            out.push_str(solution);
        }
    }

    out.push_str("\n\n_Используйте данные для решения олимпиадных задач!_");
    out
}

/// Side-by-side comparison of two records: raw mass and radius blocks, the
/// live density block when available, and the pair's pre-authored narrative.
pub fn comparison(
    pair: ComparisonPair,
    first: (&str, &CelestialRecord),
    second: (&str, &CelestialRecord),
    densities: Option<&FieldComparison>,
) -> String {
    let (name_a, a) = first;
    let (name_b, b) = second;

    let mut out = format!(
        "📊 *СРАВНЕНИЕ: {} {} vs {} {}*\n\n",
        a.emoji, name_a, b.emoji, name_b
    );
    out.push_str(&format!(
        "⚖️ *Масса:*\n• {}: {}\n• {}: {}\n\n",
        name_a,
        field_or_dash(&a.mass),
        name_b,
        field_or_dash(&b.mass)
    ));
    out.push_str(&format!(
        "📏 *Радиус:*\n• {}: {}\n• {}: {}\n\n",
        name_a,
        field_or_dash(&a.radius),
        name_b,
        field_or_dash(&b.radius)
    ));

    if let Some(d) = densities {
        out.push_str(&format!(
            "📏 *Плотность:*\n• {}: {:.0} кг/м³\n• {}: {:.0} кг/м³\n• Отношение: {:.2}\n\n",
            name_a, d.first, name_b, d.second, d.ratio
        ));
    }

    out.push_str(pair.narrative());
    out
}

/// Labeled numeric block for a free-form density calculation: inputs echoed
/// in exponential notation, density in both SI and CGS units.
pub fn density_result(result: &DensityResult) -> String {
    format!(
        "📏 *РЕЗУЛЬТАТ РАСЧЕТА ПЛОТНОСТИ*\n\n\
         *Входные данные:*\n\
         • Масса: {:.3e} кг\n\
         • Радиус: {:.3e} м\n\n\
         *📐 Расчет:*\n\
         1. Объем: V = (4/3)πR³ = {:.3e} м³\n\
         2. Плотность: {}\n\n\
         *📊 Результаты:*\n\
         • Плотность: {:.2} кг/м³\n\
         • Плотность: {:.3} г/см³",
        result.mass_kg,
        result.radius_m,
        result.volume_m3,
        DENSITY_FORMULA,
        result.density_kg_m3,
        result.density_g_cm3
    )
}

/// A task walk-through with the shared closing line.
pub fn task_solution(task: TaskKind) -> String {
    format!(
        "{}\n\n🔍 *Используйте данные из бота для решения своих задач!*",
        task.solution()
    )
}

fn field_or_dash(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("—")
}
