use crate::analytics::aggregates::{CategoryCount, GroupMean};
use crate::analytics::Overview;
use crate::errors::ServerError;
use crate::responses::xlsx_response;
use crate::responses::ResultResp;
use rust_xlsxwriter::{Workbook, Worksheet};

pub const EXPORT_FILENAME: &str = "rumah_jakarta_ringkasan.xlsx";

pub fn export_overview_xlsx(overview: &Overview) -> ResultResp {
    let buffer = build_overview_workbook(overview)?;
    xlsx_response(buffer, EXPORT_FILENAME)
}

pub fn build_overview_workbook(overview: &Overview) -> Result<Vec<u8>, ServerError> {
    let mut workbook = Workbook::new();

    write_counts(workbook.add_worksheet(), "Kota", "Kota", &overview.city_counts)?;
    write_counts(
        workbook.add_worksheet(),
        "Kecamatan",
        "Kecamatan",
        &overview.district_counts,
    )?;
    write_means(
        workbook.add_worksheet(),
        "Harga Kecamatan",
        "Harga Rata-rata",
        &overview.mean_price_by_district,
    )?;
    write_means(
        workbook.add_worksheet(),
        "Luas Bangunan Kecamatan",
        "Luas Bangunan Rata-rata",
        &overview.mean_building_area_by_district,
    )?;

    let worksheet = workbook.add_worksheet();
    set_name(worksheet, "Kota-Kecamatan")?;
    write_header(worksheet, &["Kota", "Kecamatan", "Harga Rata-rata"])?;
    for (i, row) in overview.city_district_prices.iter().enumerate() {
        let r = (i + 1) as u32;
        worksheet
            .write_string(r, 0, &row.city)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write city: {e}")))?;
        worksheet
            .write_string(r, 1, &row.district)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write district: {e}")))?;
        worksheet
            .write_number(r, 2, row.value)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write price: {e}")))?;
    }

    workbook
        .save_to_buffer()
        .map_err(|e| ServerError::XlsxError(format!("Failed to save workbook: {e}")))
}

fn set_name(worksheet: &mut Worksheet, name: &str) -> Result<(), ServerError> {
    worksheet
        .set_name(name)
        .map_err(|e| ServerError::XlsxError(format!("Failed to name sheet '{name}': {e}")))?;
    Ok(())
}

fn write_header(worksheet: &mut Worksheet, headers: &[&str]) -> Result<(), ServerError> {
    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, *header)
            .map_err(|e| {
                ServerError::XlsxError(format!("Failed to write header '{header}': {e}"))
            })?;
    }
    Ok(())
}

fn write_counts(
    worksheet: &mut Worksheet,
    sheet: &str,
    key_header: &str,
    rows: &[CategoryCount],
) -> Result<(), ServerError> {
    set_name(worksheet, sheet)?;
    write_header(worksheet, &[key_header, "Jumlah Rumah"])?;

    for (i, row) in rows.iter().enumerate() {
        let r = (i + 1) as u32;
        worksheet
            .write_string(r, 0, &row.label)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write label: {e}")))?;
        worksheet
            .write_number(r, 1, row.count as f64)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write count: {e}")))?;
    }
    Ok(())
}

fn write_means(
    worksheet: &mut Worksheet,
    sheet: &str,
    value_header: &str,
    rows: &[GroupMean],
) -> Result<(), ServerError> {
    set_name(worksheet, sheet)?;
    write_header(worksheet, &["Kecamatan", value_header])?;

    for (i, row) in rows.iter().enumerate() {
        let r = (i + 1) as u32;
        worksheet
            .write_string(r, 0, &row.key)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write district: {e}")))?;
        worksheet
            .write_number(r, 1, row.value)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write mean: {e}")))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Dataset;

    #[test]
    fn workbook_is_a_zip_archive() {
        let csv = "\
Kota,Kecamatan,Luas Tanah,Luas Bangunan,Kamar Tidur,Kamar Mandi,Harga
Jakarta Selatan,Tebet,100,80,3,2,2000
Jakarta Timur,Cakung,60,40,2,1,500
";
        let overview = Overview::compute(&Dataset::from_reader(csv.as_bytes()).unwrap());
        let buffer = build_overview_workbook(&overview).unwrap();

        // xlsx files are zip containers
        assert!(buffer.starts_with(b"PK"));
    }
}
