//! # Catálogo Estático — Todo o Conteúdo da Página
//!
//! O conteúdo educacional é **dado**, não código: listas ordenadas de
//! registros definidas uma única vez como itens `static`. Nada aqui é
//! mutado durante a vida do processo.
//!
//! O texto exibido ao usuário está em russo, o idioma do público da página.

use serde::Serialize;

use super::records::{
    ApplicationPanel, ArchitectureRecord, FactCell, FutureDirectionRecord, ImageRef, NavLink,
    Progress, ResearchAreaRecord, SectionHeader,
};
use crate::ui::Tab;

/// Agrupa todos os catálogos e textos fixos da página.
///
/// Os handlers recebem um `&'static Catalog` via [`crate::web::state::AppState`].
#[derive(Debug, Serialize)]
pub struct Catalog {
    pub site_title: &'static str,
    pub nav_links: &'static [NavLink],
    pub hero: Hero,
    pub architectures_header: SectionHeader,
    pub architectures: &'static [ArchitectureRecord],
    pub applications_header: SectionHeader,
    /// Um painel por aba, na ordem de [`Tab::ALL`].
    pub application_panels: &'static [ApplicationPanel; 4],
    pub research_header: SectionHeader,
    pub research_areas: &'static [ResearchAreaRecord],
    pub future_header: SectionHeader,
    pub future_directions: &'static [FutureDirectionRecord],
    pub ethics: Ethics,
    pub footer: &'static str,
}

/// Seção de abertura da página.
#[derive(Debug, Serialize)]
pub struct Hero {
    pub heading: &'static str,
    pub paragraphs: &'static [&'static str],
    pub call_to_action: &'static str,
    pub image: ImageRef,
}

/// Card de destaque sobre ética e segurança da IA.
#[derive(Debug, Serialize)]
pub struct Ethics {
    pub heading: &'static str,
    pub intro: &'static str,
    pub challenges: &'static [&'static str],
    pub image: ImageRef,
}

impl Catalog {
    /// Painel de conteúdo associado a uma aba.
    pub fn panel(&self, tab: Tab) -> &ApplicationPanel {
        &self.application_panels[tab.position()]
    }
}

/// O catálogo único da aplicação.
pub static CATALOG: Catalog = Catalog {
    site_title: "Искусственный интеллект",
    nav_links: &[
        NavLink { anchor: "tech", label: "Технологии" },
        NavLink { anchor: "applications", label: "Применение" },
        NavLink { anchor: "research", label: "Исследования" },
        NavLink { anchor: "future", label: "Будущее" },
    ],
    hero: Hero {
        heading: "Искусственный интеллект: его возможности и потенциал",
        paragraphs: &[
            "Искусственный интеллект трансформирует современный мир, открывая невероятные \
             возможности во всех сферах человеческой деятельности. От медицинской диагностики \
             до создания произведений искусства, от автономных транспортных средств до \
             персонализированного образования — ИИ меняет способы решения сложнейших задач.",
            "Нейронные сети, вдохновлённые структурой человеческого мозга, позволяют машинам \
             обучаться на основе данных, распознавать сложные паттерны и принимать решения. \
             Современные архитектуры глубокого обучения достигли уровня, превосходящего \
             человеческие возможности во многих задачах — от распознавания образов до \
             обработки естественного языка.",
        ],
        call_to_action: "Исследовать технологии",
        image: ImageRef {
            src: "https://cdn.poehali.dev/projects/f2aa839e-1e15-4f24-a170-066a6340f5a4/files/fccc9ff5-2b83-4f0f-a87b-fd00d1ebc1b7.jpg",
            alt: "Neural Network",
        },
    },
    architectures_header: SectionHeader {
        anchor: "tech",
        badge: "Архитектуры",
        heading: "Типы нейронных сетей",
        paragraphs: &[
            "Детальный разбор основных архитектур современных нейронных сетей. Каждая \
             архитектура разработана для решения специфических задач и обладает уникальными \
             особенностями, которые делают её оптимальной для определённых типов данных и \
             применений.",
            "Нажмите на карточку, чтобы узнать больше о применении и ключевых особенностях \
             каждой архитектуры.",
        ],
    },
    architectures: &[
        ArchitectureRecord {
            title: "Сверточные нейронные сети (CNN)",
            description: "Специализированная архитектура для обработки данных с сеточной \
                          топологией, таких как изображения",
            icon: "Grid3x3",
            applications: &[
                "Компьютерное зрение",
                "Распознавание образов",
                "Медицинская диагностика",
            ],
            key_features: &["Свертка", "Pooling", "Feature extraction", "Иерархическое обучение"],
        },
        ArchitectureRecord {
            title: "Рекуррентные сети (RNN/LSTM)",
            description: "Архитектура для работы с последовательными данными и временными рядами",
            icon: "GitBranch",
            applications: &[
                "Обработка естественного языка",
                "Предсказание временных рядов",
                "Генерация текста",
            ],
            key_features: &[
                "Память состояний",
                "Долгосрочные зависимости",
                "Backpropagation through time",
            ],
        },
        ArchitectureRecord {
            title: "Трансформеры (Transformer)",
            description: "Современная архитектура на основе механизма внимания для параллельной \
                          обработки последовательностей",
            icon: "Sparkles",
            applications: &["GPT модели", "BERT", "Машинный перевод", "Мультимодальные модели"],
            key_features: &[
                "Self-attention",
                "Позиционное кодирование",
                "Параллелизация",
                "Масштабируемость",
            ],
        },
        ArchitectureRecord {
            title: "Генеративные состязательные сети (GAN)",
            description: "Две нейросети соревнуются: генератор создает данные, дискриминатор \
                          их оценивает",
            icon: "Users",
            applications: &[
                "Генерация изображений",
                "Style transfer",
                "Deepfake",
                "Дополнение данных",
            ],
            key_features: &[
                "Adversarial training",
                "Генератор",
                "Дискриминатор",
                "Nash equilibrium",
            ],
        },
    ],
    applications_header: SectionHeader {
        anchor: "applications",
        badge: "Области применения",
        heading: "Где используется ИИ",
        paragraphs: &[
            "Искусственный интеллект проникает во все сферы нашей жизни, революционизируя \
             способы работы, обучения, лечения и взаимодействия с технологиями. От \
             промышленного производства до творческих индустрий — ИИ открывает новые \
             горизонты возможностей.",
        ],
    },
    application_panels: &[
        ApplicationPanel {
            tab: Tab::Vision,
            icon: "Eye",
            title: "Компьютерное зрение",
            description: "Распознавание объектов, сегментация изображений, детекция лиц, \
                          автономные транспортные средства, медицинская визуализация",
            facts: [
                FactCell { heading: "Технологии", body: "YOLO, Mask R-CNN, EfficientNet" },
                FactCell { heading: "Точность", body: "95-99% на ImageNet" },
            ],
        },
        ApplicationPanel {
            tab: Tab::Nlp,
            icon: "MessageSquare",
            title: "Обработка естественного языка",
            description: "Машинный перевод, генерация текста, чат-боты, sentiment analysis, \
                          извлечение информации из документов",
            facts: [
                FactCell { heading: "Модели", body: "GPT-4, BERT, T5, LLaMA" },
                FactCell { heading: "Параметры", body: "До 1.7 трлн параметров" },
            ],
        },
        ApplicationPanel {
            tab: Tab::Robotics,
            icon: "Bot",
            title: "Роботизированные системы",
            description: "Промышленная автоматизация, автономные дроны, роботы-ассистенты, \
                          манипуляция объектами, навигация",
            facts: [
                FactCell { heading: "Методы", body: "RL, Imitation Learning, SLAM" },
                FactCell { heading: "Применение", body: "Логистика, производство" },
            ],
        },
        ApplicationPanel {
            tab: Tab::Healthcare,
            icon: "Heart",
            title: "Медицина и здравоохранение",
            description: "Диагностика заболеваний, анализ медицинских изображений, разработка \
                          лекарств, персонализированная медицина, прогнозирование",
            facts: [
                FactCell { heading: "Области", body: "Онкология, кардиология, радиология" },
                FactCell { heading: "Результаты", body: "Точность диагностики экспертов" },
            ],
        },
    ],
    research_header: SectionHeader {
        anchor: "research",
        badge: "Научные прорывы",
        heading: "Ключевые исследования",
        paragraphs: &[
            "Основополагающие работы, изменившие развитие искусственного интеллекта. Эти \
             исследования стали краеугольными камнями современного машинного обучения и \
             открыли путь к созданию систем, способных решать задачи, ранее доступные только \
             человеку.",
            "Каждая область представляет собой активное направление исследований с постоянными \
             инновациями и прорывами, расширяющими границы возможного.",
        ],
    },
    research_areas: &[
        ResearchAreaRecord {
            title: "Компьютерное зрение",
            papers: &["ResNet (2015)", "YOLO (2016)", "Vision Transformer (2020)"],
            icon: "Eye",
        },
        ResearchAreaRecord {
            title: "Обработка естественного языка",
            papers: &["Attention is All You Need (2017)", "GPT-3 (2020)", "BERT (2018)"],
            icon: "MessageSquare",
        },
        ResearchAreaRecord {
            title: "Reinforcement Learning",
            papers: &["AlphaGo (2016)", "DQN (2015)", "PPO (2017)"],
            icon: "Gamepad2",
        },
        ResearchAreaRecord {
            title: "Multimodal AI",
            papers: &["CLIP (2021)", "DALL-E 2 (2022)", "GPT-4 Vision (2023)"],
            icon: "Layers",
        },
    ],
    future_header: SectionHeader {
        anchor: "future",
        badge: "Перспективы",
        heading: "Будущее искусственного интеллекта",
        paragraphs: &[
            "Направления развития и потенциальные прорывы в области ИИ. Мы стоим на пороге \
             фундаментальных изменений в технологии искусственного интеллекта, которые могут \
             радикально трансформировать общество и открыть новые возможности для \
             человечества.",
            "От квантовых вычислений до искусственного общего интеллекта — эти направления \
             определяют будущее технологического прогресса на десятилетия вперёд.",
        ],
    },
    future_directions: &[
        FutureDirectionRecord {
            title: "Искусственный общий интеллект (AGI)",
            description: "Разработка систем с универсальными когнитивными способностями",
            progress: Progress::new(15),
            icon: "Brain",
        },
        FutureDirectionRecord {
            title: "Квантовое машинное обучение",
            description: "Использование квантовых компьютеров для ускорения обучения",
            progress: Progress::new(25),
            icon: "Atom",
        },
        FutureDirectionRecord {
            title: "Нейроморфные вычисления",
            description: "Чипы, имитирующие структуру биологического мозга",
            progress: Progress::new(40),
            icon: "Cpu",
        },
        FutureDirectionRecord {
            title: "Объяснимый ИИ (XAI)",
            description: "Создание прозрачных и интерпретируемых моделей",
            progress: Progress::new(55),
            icon: "FileSearch",
        },
    ],
    ethics: Ethics {
        heading: "Этика и безопасность ИИ",
        intro: "С развитием мощных систем ИИ становится критически важным обеспечить их \
                безопасность, прозрачность и соответствие человеческим ценностям. Основные \
                вызовы:",
        challenges: &[
            "Предвзятость и справедливость",
            "Прозрачность решений",
            "Контроль и выравнивание целей",
            "Конфиденциальность данных",
        ],
        image: ImageRef {
            src: "https://cdn.poehali.dev/projects/f2aa839e-1e15-4f24-a170-066a6340f5a4/files/1e28251e-f4d4-42a8-93f8-a0c783d777c3.jpg",
            alt: "AI Ethics",
        },
    },
    footer: "© 2025 Искусственный интеллект: возможности и потенциал",
};

#[cfg(test)]
mod tests {
    use super::*;

    /// Os painéis seguem exatamente a ordem das abas
    #[test]
    fn test_panels_match_tab_order() {
        for tab in Tab::ALL {
            assert_eq!(CATALOG.panel(tab).tab, tab);
        }
    }

    /// Cada seção tem quatro entradas
    #[test]
    fn test_catalog_sizes() {
        assert_eq!(CATALOG.architectures.len(), 4);
        assert_eq!(CATALOG.research_areas.len(), 4);
        assert_eq!(CATALOG.future_directions.len(), 4);
        assert_eq!(CATALOG.ethics.challenges.len(), 4);
        assert_eq!(CATALOG.nav_links.len(), 4);
    }

    /// Todo registro de arquitetura tem aplicações e características
    #[test]
    fn test_architectures_have_details() {
        for arch in CATALOG.architectures {
            assert!(!arch.applications.is_empty(), "{} sem aplicações", arch.title);
            assert!(!arch.key_features.is_empty(), "{} sem características", arch.title);
        }
    }

    /// As âncoras da navegação apontam para seções existentes
    #[test]
    fn test_nav_links_point_to_sections() {
        let anchors = [
            CATALOG.architectures_header.anchor,
            CATALOG.applications_header.anchor,
            CATALOG.research_header.anchor,
            CATALOG.future_header.anchor,
        ];
        for link in CATALOG.nav_links {
            assert!(anchors.contains(&link.anchor), "âncora órfã: {}", link.anchor);
        }
    }

    /// Imagens externas são absolutas e têm texto alternativo
    #[test]
    fn test_images_are_absolute_with_alt() {
        for image in [&CATALOG.hero.image, &CATALOG.ethics.image] {
            assert!(image.src.starts_with("https://"));
            assert!(!image.alt.is_empty());
        }
    }
}
