// SPDX-License-Identifier: PMPL-1.0-or-later

//! Built-in portfolio content, used when no site configuration is given.

use super::{CatalogEntry, LocalizedText, Skill};
use crate::types::{EntryId, Icon, SkillLevel};

fn skill(en: &str, es: &str, level: SkillLevel) -> Skill {
    Skill::new(LocalizedText::en_es(en, es), level)
}

/// Same name in both languages (product and technology names).
fn tech(name: &str, level: SkillLevel) -> Skill {
    skill(name, name, level)
}

pub fn builtin_projects() -> Vec<CatalogEntry> {
    use SkillLevel::*;

    let mut ecommerce = CatalogEntry::new(
        EntryId::new(1),
        LocalizedText::en_es("E-commerce Platform", "Plataforma de Comercio Electrónico"),
        LocalizedText::en_es(
            "A comprehensive e-commerce platform with a user-friendly interface and secure payment gateway.",
            "Una plataforma de comercio electrónico integral con una interfaz fácil de usar y una pasarela de pago segura.",
        ),
    )
    .with_brief(LocalizedText::en_es(
        "Next-generation e-commerce solution built with modern web technologies.",
        "Solución de comercio electrónico de próxima generación construida con tecnologías web modernas.",
    ))
    .with_date(LocalizedText::en_es("January 2024", "Enero 2024"))
    .with_category(LocalizedText::en_es("Web Development", "Desarrollo Web"))
    .with_skills(vec![
        tech("React", Advanced),
        tech("Node.js", Advanced),
        tech("TypeScript", Advanced),
        tech("MongoDB", Intermediate),
        tech("AWS", Intermediate),
        tech("Docker", Intermediate),
    ]);
    ecommerce.image = Some("/assets/images/project1.jpg".to_string());
    ecommerce.live_url = Some("https://example.com".to_string());
    ecommerce.repo_url = Some("https://github.com/username/project".to_string());

    let mut mobile = CatalogEntry::new(
        EntryId::new(2),
        LocalizedText::en_es("Mobile Application", "Aplicación Móvil"),
        LocalizedText::en_es(
            "A mobile application designed to enhance user experience with intuitive navigation and seamless performance.",
            "Una aplicación móvil diseñada para mejorar la experiencia del usuario con una navegación intuitiva y un rendimiento fluido.",
        ),
    )
    .with_date(LocalizedText::en_es("February 2024", "Febrero 2024"))
    .with_skills(vec![tech("Flutter", Advanced), tech("Firebase", Advanced)]);
    mobile.image = Some("/assets/images/project2.jpg".to_string());

    let mut marketing = CatalogEntry::new(
        EntryId::new(3),
        LocalizedText::en_es("Digital Marketing Campaign", "Campaña de Marketing Digital"),
        LocalizedText::en_es(
            "A digital marketing campaign that leverages social media and SEO strategies to boost brand visibility.",
            "Una campaña de marketing digital que aprovecha las estrategias de redes sociales y SEO para aumentar la visibilidad de la marca.",
        ),
    )
    .with_date(LocalizedText::en_es("March 2024", "Marzo 2024"))
    .with_skills(vec![
        tech("Google Analytics", Intermediate),
        tech("SEO", Advanced),
    ]);
    marketing.image = Some("/assets/images/project3.jpg".to_string());

    vec![ecommerce, mobile, marketing]
}

pub fn builtin_experiences() -> Vec<CatalogEntry> {
    use SkillLevel::*;

    let experience = |id: u32,
                      area: LocalizedText,
                      description: LocalizedText,
                      years: u32,
                      icon: Icon,
                      skills: Vec<Skill>| {
        let mut entry = CatalogEntry::new(EntryId::new(id), area, description).with_skills(skills);
        entry.years = Some(years);
        entry.icon = Some(icon);
        entry
    };

    vec![
        experience(
            1,
            LocalizedText::en_es("Development", "Desarrollo"),
            LocalizedText::en_es("Enterprise Solutions & APIs", "Soluciones empresariales y APIs"),
            8,
            Icon::Code,
            vec![
                skill("Mulesoft Development", "Desarrollo Mulesoft", Advanced),
                skill("API Design", "Diseño de APIs", Expert),
                skill("Integration Patterns", "Patrones de Integración", Advanced),
            ],
        ),
        experience(
            2,
            LocalizedText::en_es("Data Architecture", "Arquitectura de Datos"),
            LocalizedText::en_es("Integration & Analytics", "Integración y análisis"),
            6,
            Icon::Database,
            vec![
                skill("Data Modeling", "Modelado de Datos", Expert),
                skill("SQL & NoSQL", "SQL y NoSQL", Advanced),
                skill("ETL Processes", "Procesos ETL", Advanced),
            ],
        ),
        experience(
            3,
            LocalizedText::en_es("Cloud Solutions", "Soluciones en la Nube"),
            LocalizedText::en_es("AWS & Azure Platforms", "Plataformas AWS y Azure"),
            5,
            Icon::Cloud,
            vec![
                skill("AWS Services", "Servicios AWS", Advanced),
                skill("Azure Platform", "Plataforma Azure", Advanced),
                skill("Cloud Architecture", "Arquitectura Cloud", Expert),
            ],
        ),
    ]
}
