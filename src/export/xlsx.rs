// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::excel_date::parse_to_excel_date;
use crate::export::model::Sheet;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use unicode_width::UnicodeWidthStr;

/// Excel's limit on worksheet names.
const MAX_SHEET_NAME: usize = 31;
const EMPTY_NOTICE: &str = "Sem registros / No records";

/// Header and row banding shared by every worksheet of a workbook.
struct SheetStyle {
    header: Format,
    bands: [Color; 2],
}

impl SheetStyle {
    fn new() -> Self {
        Self {
            header: Format::new()
                .set_bold()
                .set_font_color(Color::White)
                .set_background_color(Color::RGB(0x1F4E78))
                .set_pattern(FormatPattern::Solid)
                .set_border(FormatBorder::Thin)
                .set_align(FormatAlign::Center),
            bands: [Color::RGB(0xDDEBF7), Color::White],
        }
    }

    fn cell(&self, row_index: usize) -> Format {
        Format::new()
            .set_background_color(self.bands[row_index % 2])
            .set_pattern(FormatPattern::Solid)
            .set_border(FormatBorder::Thin)
    }
}

/// Workbook bytes, one styled worksheet per sheet.
pub(crate) fn encode_xlsx(sheets: &[Sheet]) -> AppResult<Vec<u8>> {
    let style = SheetStyle::new();
    let mut workbook = Workbook::new();

    for (index, sheet) in sheets.iter().enumerate() {
        let worksheet = workbook.add_worksheet();
        worksheet
            .set_name(sheet_name(&sheet.name, index))
            .map_err(to_export_error)?;
        fill_worksheet(worksheet, sheet, &style)?;
    }

    if sheets.is_empty() {
        workbook
            .add_worksheet()
            .write(0, 0, EMPTY_NOTICE)
            .map_err(to_export_error)?;
    }

    workbook.save_to_buffer().map_err(to_export_error)
}

fn fill_worksheet(worksheet: &mut Worksheet, sheet: &Sheet, style: &SheetStyle) -> AppResult<()> {
    if sheet.headers.is_empty() {
        worksheet.write(0, 0, EMPTY_NOTICE).map_err(to_export_error)?;
        return Ok(());
    }

    let mut widths: Vec<usize> = Vec::with_capacity(sheet.headers.len());
    for (col, title) in sheet.headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, title.as_str(), &style.header)
            .map_err(to_export_error)?;
        widths.push(title.width());
    }
    worksheet.set_freeze_panes(1, 0).map_err(to_export_error)?;

    for (index, values) in sheet.rows.iter().enumerate() {
        let format = style.cell(index);
        for (col, value) in values.iter().enumerate() {
            put_value(worksheet, index as u32 + 1, col as u16, value, &format)?;
            if let Some(w) = widths.get_mut(col) {
                *w = (*w).max(value.width());
            }
        }
    }

    for (col, w) in widths.into_iter().enumerate() {
        worksheet
            .set_column_width(col as u16, w as f64 + 2.0)
            .map_err(to_export_error)?;
    }
    Ok(())
}

/// Timestamps and `HH:MM` durations become Excel serials, plain numbers stay
/// numeric, everything else is text.
fn put_value(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    value: &str,
    format: &Format,
) -> AppResult<()> {
    let written = if let Some((num_format, serial)) = parse_to_excel_date(value) {
        worksheet.write_with_format(row, col, serial, &format.clone().set_num_format(num_format))
    } else if let Some(num) = numeric(value) {
        worksheet.write_with_format(row, col, num, &format.clone().set_align(FormatAlign::Right))
    } else {
        worksheet.write_with_format(row, col, value, format)
    };
    written.map_err(to_export_error)?;
    Ok(())
}

/// Document ids such as `01234567890` keep their leading zero as text.
fn numeric(value: &str) -> Option<f64> {
    let leading_zero = value.len() > 1 && value.starts_with('0') && !value.starts_with("0.");
    if leading_zero {
        return None;
    }
    value.parse::<f64>().ok()
}

/// Worksheet name: forbidden characters dropped, truncated, never empty.
fn sheet_name(name: &str, index: usize) -> String {
    let cleaned: String = name
        .chars()
        .filter(|c| !matches!(c, '[' | ']' | ':' | '*' | '?' | '/' | '\\'))
        .take(MAX_SHEET_NAME)
        .collect();

    if cleaned.trim().is_empty() {
        format!("Sheet{}", index + 1)
    } else {
        cleaned
    }
}

fn to_export_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}
