use crate::{DeviceCategory, Price};
use std::io::{self, Write};

/// Read-only surface shared by every peripheral.
///
/// Implementors supply the attributes; the display name and the detail
/// report are derived from them.
pub trait Peripheral {
    fn category(&self) -> DeviceCategory;

    fn model(&self) -> &str;

    fn brand(&self) -> &str;

    fn price(&self) -> Price;

    /// The two category-specific values, in the order of
    /// [`DeviceCategory::field_labels`].
    fn specifics(&self) -> [&str; 2];

    /// Short label used in the device list: `"<category>: <brand> <model>"`.
    fn name(&self) -> String {
        format!("{}: {} {}", self.category().label(), self.brand(), self.model())
    }

    /// Multi-line detail report, ending with a blank line.
    fn info(&self) -> String {
        let [first_label, second_label] = self.category().field_labels();
        let [first, second] = self.specifics();
        format!(
            "{}\nЦена: {} руб.\n{}: {}\n{}: {}\n\n",
            self.name(),
            self.price(),
            first_label,
            first,
            second_label,
            second
        )
    }

    fn write_info(&self, out: &mut dyn Write) -> io::Result<()> {
        out.write_all(self.info().as_bytes())
    }
}
