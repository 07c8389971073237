//! User-facing screen texts and canned replies.
//!
//! Everything here is pre-authored reference content rendered as-is; none of
//! it is recomputed at runtime.

pub const WELCOME: &str = "\
🚀 *Добро пожаловать в AstroBot!*
*Справочник для олимпиадной астрономии*

*Доступные объекты:*
• ☀️ **Солнце** - наша звезда
• 🪐 **8 Планет** - от Меркурия до Нептуна
• ⭐️ **Сириус** - самая яркая звезда

*Функции:*
📊 **Сравнить** - сравнение двух объектов
📝 **Задачи** - олимпиадные задачи с решениями
🔬 **Методы** - методики измерений
❓ **Помощь** - справка по боту

*Нажмите кнопку ниже для начала:*";

pub const METHODS: &str = "\
🔬 *МЕТОДЫ АСТРОНОМИЧЕСКИХ ИЗМЕРЕНИЙ*

*📡 Определение массы:*
• Планеты: по движению спутников
• Звезды в двойных системах: третий закон Кеплера

*📏 Определение радиуса:*
• Радиолокация (планеты)
• Интерферометрия (звезды)
• Затменные двойные системы

*☀️ Определение светимости:*
• Фотометрия + параллакс
• Модели атмосфер звезд

*📍 Определение расстояния:*
• Тригонометрический параллакс
• Спектроскопический параллакс
• Цефеиды";

pub const HELP: &str = "\
❓ *ПОМОЩЬ ПО ИСПОЛЬЗОВАНИЮ ASTROBOT*

*Основные функции:*
• 🪐 **8 Планет** - информация о планетах
• ⭐️ **Сириус** - данные о звезде
• ☀️ **Солнце** - параметры нашей звезды
• 📊 **Сравнить** - сравнение объектов
• 📝 **Задачи** - олимпиадные задачи
• 🔬 **Методы** - методики измерений

*🎯 Для олимпиад:*
• Все задачи содержат полное решение
• Указаны все используемые формулы
• Приведены промежуточные расчеты

*✅ Особенности:*
• К каждой задаче прилагается решение
• Показаны все шаги расчета
• Формулы указаны в решениях задач";

pub const PLANET_PROMPT: &str = "🌌 *Выберите планету:*\n(8 планет Солнечной системы)";

pub const COMPARE_PROMPT: &str = "⚖️ *Выберите пару для сравнения:*";

pub const TASK_PROMPT: &str = "📚 *Выберите тип задачи из списка ниже:*";

pub const BACK_TO_MAIN: &str = "🏠 *Возврат в главное меню*";

pub const USE_MENU: &str = "Пожалуйста, используйте кнопки меню ⬇️";

pub const DENSITY_USAGE: &str =
    "❌ Неверный формат. Используйте:\n`плотность: масса=5.9722e24 радиус=6.371e6`";

pub const DENSITY_NUMBER_ERROR: &str =
    "❌ Ошибка в формате чисел. Используйте научную нотацию.";

pub const TASK_NOT_FOUND: &str = "📝 Выберите тип задачи из списка выше";

pub const PAIR_NOT_FOUND: &str =
    "❌ Такая пара для сравнения не найдена. Выберите пару из списка.";

pub const PAIR_BODY_MISSING: &str = "❌ Один из объектов не найден в базе данных.";

pub fn body_not_found(name: &str) -> String {
    format!("❌ Объект '{}' не найден в базе данных.", name)
}
