use std::fmt;

/// Kind of peripheral a device belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceCategory {
    Headphones,
    Microphone,
    Keyboard,
}

impl DeviceCategory {
    /// Label printed in front of brand and model.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Headphones => "Наушники",
            Self::Microphone => "Микрофон",
            Self::Keyboard => "Клавиатура",
        }
    }

    /// Labels of the two category-specific fields, in report order.
    pub fn field_labels(&self) -> [&'static str; 2] {
        match self {
            Self::Headphones => ["Тип конструкции", "Метод крепления"],
            Self::Microphone => ["Частотный диапазон", "Чувствительность"],
            Self::Keyboard => ["Тип выключателя", "Интерфейс"],
        }
    }
}

impl fmt::Display for DeviceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Headphones => write!(f, "headphones"),
            Self::Microphone => write!(f, "microphone"),
            Self::Keyboard => write!(f, "keyboard"),
        }
    }
}
