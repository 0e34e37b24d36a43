//! The catalog that ships with cssref.

use super::{CatalogData, CatalogSource};
use crate::error::Result;
use crate::model::{Category, CssProperty, Difficulty};

#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinSource;

impl CatalogSource for BuiltinSource {
    fn load(&self) -> Result<CatalogData> {
        Ok(CatalogData {
            categories: categories(),
            properties: properties(),
        })
    }

    fn describe(&self) -> String {
        "built-in catalog".to_string()
    }
}

fn category(
    id: &str,
    name: &str,
    icon: &str,
    description: &str,
    properties: &[&str],
    order: i32,
    color: &str,
) -> Category {
    Category {
        id: id.to_string(),
        name: name.to_string(),
        icon: icon.to_string(),
        description: description.to_string(),
        properties: properties.iter().map(|p| p.to_string()).collect(),
        order,
        color: color.to_string(),
    }
}

pub fn categories() -> Vec<Category> {
    vec![
        category(
            "color",
            "Цвет",
            "🎨",
            "Свойства для работы с цветами и фонами",
            &[
                "color",
                "background",
                "background-image",
                "background-position",
                "background-color",
            ],
            1,
            "#667eea",
        ),
        category(
            "text",
            "Текст",
            "📝",
            "Свойства для форматирования и стилизации текста",
            &["font-family", "font-size", "font-weight", "text-align"],
            2,
            "#764ba2",
        ),
        category(
            "position",
            "Позиционирование",
            "📍",
            "Свойства для управления размерами и позиционированием элементов",
            &["margin", "padding", "width", "height"],
            3,
            "#f093fb",
        ),
        // Reserved for grid and flexbox; nothing lives here yet.
        category(
            "layout",
            "Макет",
            "📐",
            "Свойства для создания сложных макетов",
            &[],
            4,
            "#4facfe",
        ),
    ]
}

pub fn properties() -> Vec<CssProperty> {
    let mut props = color_properties();
    props.extend(text_properties());
    props.extend(position_properties());
    props
}

fn color_properties() -> Vec<CssProperty> {
    vec![
        CssProperty::new(
            "color",
            "🎨 Color",
            "Управляет цветом текста элемента",
            "color",
        )
        .with_tags(&["color", "цвет", "текст", "колор"])
        .with_example(
            "Именованные цвета",
            "color: red;",
            "Использование предопределенных цветов",
        )
        .with_example(
            "HEX цвета",
            "color: #ff0000;",
            "Шестнадцатеричные значения цветов",
        )
        .with_example("RGB", "color: rgb(255, 0, 0);", "RGB формат цвета")
        .with_related(&["background-color", "border-color"])
        .with_task("Сделай текст зеленым с помощью color.", "color: green;"),
        CssProperty::new(
            "background",
            "🌈 Background",
            "Устанавливает цвет фона элемента",
            "color",
        )
        .with_tags(&["background", "фон", "цвет"])
        .with_example("Цвет фона", "background: blue;", "Простой цвет фона")
        .with_example(
            "Градиент",
            "background: linear-gradient(45deg, #667eea, #764ba2);",
            "Градиентный фон",
        )
        .with_related(&["background-color", "background-image", "background-position"]),
        CssProperty::new(
            "background-position",
            "🎯 Background-position",
            "Контролирует позицию фонового изображения",
            "color",
        )
        .with_difficulty(Difficulty::Intermediate)
        .with_tags(&["background-position", "позиция", "фон", "изображение"])
        .with_example(
            "Ключевые слова",
            "background-position: center;",
            "Позиционирование по ключевым словам",
        )
        .with_example(
            "Точные значения",
            "background-position: 20px 40px;",
            "Позиционирование в пикселях",
        )
        .with_related(&["background", "background-image", "background-size"])
        .with_task(
            "Прижми фон к правому нижнему углу блока с помощью background-position.",
            "background-position: right bottom;",
        ),
        CssProperty::new(
            "background-image",
            "🖼️ Background-image",
            "Добавляет изображение в качестве фона",
            "color",
        )
        .with_difficulty(Difficulty::Intermediate)
        .with_tags(&["background-image", "картинка", "изображение", "фон"])
        .with_example(
            "URL изображения",
            "background-image: url(\"image.jpg\");",
            "Фоновое изображение по URL",
        )
        .with_example(
            "Градиент",
            "background-image: linear-gradient(45deg, #667eea, #764ba2);",
            "Градиент как фоновое изображение",
        )
        .with_related(&["background", "background-position", "background-size"]),
        CssProperty::new(
            "background-color",
            "🪣 Background-color",
            "Задает сплошной цвет заливки фона элемента",
            "color",
        )
        .with_tags(&["background-color", "фон", "заливка", "цвет"])
        .with_example(
            "Именованный цвет",
            "background-color: lightyellow;",
            "Заливка предопределенным цветом",
        )
        .with_example(
            "Полупрозрачный фон",
            "background-color: rgba(0, 0, 0, 0.5);",
            "Цвет с альфа-каналом",
        )
        .with_related(&["background", "color"]),
    ]
}

fn text_properties() -> Vec<CssProperty> {
    vec![
        CssProperty::new(
            "font-family",
            "🔤 Font-family",
            "Выбирает шрифт для отображения текста",
            "text",
        )
        .with_tags(&["font-family", "шрифт", "семейство", "текст"])
        .with_example(
            "Системные шрифты",
            "font-family: Arial, sans-serif;",
            "Использование системных шрифтов",
        )
        .with_example(
            "Google Fonts",
            "font-family: \"Roboto\", sans-serif;",
            "Веб-шрифты",
        )
        .with_related(&["font-size", "font-weight", "font-style"])
        .with_task(
            "Задай для текста шрифт Georgia с запасным вариантом serif.",
            "font-family: Georgia, serif;",
        ),
        CssProperty::new(
            "font-size",
            "✍️ Font-size",
            "Устанавливает размер шрифта текста",
            "text",
        )
        .with_tags(&["font-size", "размер", "текст", "шрифт"])
        .with_example("Пиксели", "font-size: 16px;", "Размер в пикселях")
        .with_example(
            "Относительные единицы",
            "font-size: 1.2rem;",
            "Размер относительно корневого элемента",
        )
        .with_related(&["font-family", "font-weight", "line-height"])
        .with_task(
            "Сделай размер шрифта больше 20px с помощью font-size.",
            "font-size: 24px;",
        ),
        CssProperty::new(
            "font-weight",
            "💪 Font-weight",
            "Контролирует толщину шрифта",
            "text",
        )
        .with_tags(&["font-weight", "толщина", "жирность", "текст"])
        .with_example("Ключевые слова", "font-weight: bold;", "Жирный шрифт")
        .with_example("Числовые значения", "font-weight: 700;", "Толщина от 100 до 900")
        .with_related(&["font-family", "font-size", "font-style"])
        .with_task("Сделай текст жирным с помощью font-weight.", "font-weight: bold;"),
        CssProperty::new(
            "text-align",
            "📝 Text-align",
            "Выравнивает текст по горизонтали",
            "text",
        )
        .with_tags(&["text-align", "выравнивание", "текст", "центр"])
        .with_example("По центру", "text-align: center;", "Центрирование текста")
        .with_example("По ширине", "text-align: justify;", "Выравнивание по ширине")
        .with_related(&["vertical-align", "line-height"])
        .with_task(
            "Выровняй текст по центру с помощью text-align.",
            "text-align: center;",
        ),
    ]
}

fn position_properties() -> Vec<CssProperty> {
    vec![
        CssProperty::new(
            "margin",
            "📏 Margin",
            "Устанавливает внешние отступы элемента",
            "position",
        )
        .with_tags(&["margin", "отступ", "внешний", "позиционирование"])
        .with_example(
            "Все стороны",
            "margin: 20px;",
            "Одинаковые отступы со всех сторон",
        )
        .with_example(
            "Отдельные стороны",
            "margin: 10px 20px 15px 5px;",
            "Разные отступы для каждой стороны",
        )
        .with_related(&["padding", "border", "width"])
        .with_task(
            "Создай отступ 20px со всех сторон с помощью margin.",
            "margin: 20px;",
        ),
        CssProperty::new(
            "padding",
            "📐 Padding",
            "Устанавливает внутренние отступы элемента",
            "position",
        )
        .with_tags(&["padding", "отступ", "внутренний", "позиционирование"])
        .with_example("Все стороны", "padding: 15px;", "Одинаковые внутренние отступы")
        .with_example(
            "Вертикально и горизонтально",
            "padding: 10px 20px;",
            "Разные отступы по вертикали и горизонтали",
        )
        .with_related(&["margin", "border", "width"])
        .with_task(
            "Создай внутренний отступ 20px со всех сторон с помощью padding.",
            "padding: 20px;",
        ),
        CssProperty::new("width", "↔️ Width", "Задает ширину элемента", "position")
            .with_tags(&["width", "ширина", "размер", "позиционирование"])
            .with_example("Фиксированная ширина", "width: 300px;", "Ширина в пикселях")
            .with_example(
                "Процентная ширина",
                "width: 50%;",
                "Ширина в процентах от родителя",
            )
            .with_related(&["height", "max-width", "min-width"])
            .with_task("Сделай ширину блока ровно 200px с помощью width.", "width: 200px;"),
        CssProperty::new("height", "↕️ Height", "Задает высоту элемента", "position")
            .with_tags(&["height", "высота", "размер", "позиционирование"])
            .with_example("Фиксированная высота", "height: 200px;", "Высота в пикселях")
            .with_example("Высота viewport", "height: 100vh;", "Высота в единицах viewport")
            .with_related(&["width", "max-height", "min-height"])
            .with_task(
                "Сделай высоту блока ровно 150px с помощью height.",
                "height: 150px;",
            ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn builtin_ids_and_paths_are_unique() {
        let props = properties();
        let ids: HashSet<&str> = props.iter().map(|p| p.id.as_str()).collect();
        let paths: HashSet<&str> = props.iter().map(|p| p.path.as_str()).collect();
        assert_eq!(ids.len(), props.len());
        assert_eq!(paths.len(), props.len());

        let cats = categories();
        let cat_ids: HashSet<&str> = cats.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(cat_ids.len(), cats.len());
    }

    #[test]
    fn every_property_points_at_a_known_category() {
        let cats = categories();
        for prop in properties() {
            assert!(
                cats.iter().any(|c| c.id == prop.category),
                "{} has unknown category {}",
                prop.id,
                prop.category
            );
        }
    }

    #[test]
    fn category_lists_match_membership() {
        let props = properties();
        for cat in categories() {
            let members: Vec<&str> = props
                .iter()
                .filter(|p| p.category == cat.id)
                .map(|p| p.id.as_str())
                .collect();
            let mut listed: Vec<&str> = cat.properties.iter().map(String::as_str).collect();
            let mut actual = members.clone();
            listed.sort_unstable();
            actual.sort_unstable();
            assert_eq!(listed, actual, "category {}", cat.id);
        }
    }
}
