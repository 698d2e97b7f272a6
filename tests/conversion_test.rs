use anyhow::Result;
use csv_json_etl::{convert, ConvertError, ConverterConfig, CsvJsonPipeline, EtlEngine, ErrorKind, LocalStorage};
use serde_json::json;
use tempfile::TempDir;

fn write_input(dir: &TempDir, name: &str, content: &str) -> String {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path.to_str().unwrap().to_string()
}

fn output_path(dir: &TempDir) -> String {
    dir.path().join("output.json").to_str().unwrap().to_string()
}

#[test]
fn test_end_to_end_scenario() -> Result<()> {
    let dir = TempDir::new()?;
    let input = write_input(&dir, "datospoint.csv", "name,age\nAna,30\nLuis,\n");
    let output = output_path(&dir);

    let summary = convert(&input, &output)?;
    assert_eq!(summary.record_count, 2);
    assert!(summary.output_path.ends_with("output.json"));

    let written = std::fs::read_to_string(&output)?;
    assert_eq!(
        written,
        "[\n    {\n        \"name\": \"Ana\",\n        \"age\": 30\n    },\n    {\n        \"name\": \"Luis\",\n        \"age\": null\n    }\n]"
    );
    Ok(())
}

#[test]
fn test_round_trip_preserves_rows_columns_and_types() -> Result<()> {
    let dir = TempDir::new()?;
    let csv = "Direccion,CP,LOCALIDAD,PROVINCIA,Latitude,Longitude,Activo\n\
               \"Av. Rivadavia 5000, PB\",1424,Caballito,CABA,-34.6189,-58.4372,true\n\
               Calle 7 123,1900,La Plata,Buenos Aires,-34.9205,-57.9536,false\n\
               Mitre 55,,Quilmes,Buenos Aires,,,\n";
    let input = write_input(&dir, "datospoint.csv", csv);
    let output = output_path(&dir);

    convert(&input, &output)?;

    let text = std::fs::read_to_string(&output)?;
    let parsed: serde_json::Value = serde_json::from_str(&text)?;
    let rows = parsed.as_array().unwrap();
    assert_eq!(rows.len(), 3);

    let expected_keys = [
        "Direccion", "CP", "LOCALIDAD", "PROVINCIA", "Latitude", "Longitude", "Activo",
    ];
    for row in rows {
        let keys: Vec<&str> = row.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, expected_keys);
    }

    assert_eq!(
        rows[0],
        json!({
            "Direccion": "Av. Rivadavia 5000, PB",
            "CP": 1424,
            "LOCALIDAD": "Caballito",
            "PROVINCIA": "CABA",
            "Latitude": -34.6189,
            "Longitude": -58.4372,
            "Activo": true
        })
    );
    assert_eq!(rows[1]["Activo"], json!(false));
    assert_eq!(rows[2]["CP"], serde_json::Value::Null);
    assert_eq!(rows[2]["Activo"], serde_json::Value::Null);
    Ok(())
}

#[test]
fn test_header_only_input_gives_empty_array() -> Result<()> {
    let dir = TempDir::new()?;
    let input = write_input(&dir, "datospoint.csv", "name,age\n");
    let output = output_path(&dir);

    let summary = convert(&input, &output)?;
    assert_eq!(summary.record_count, 0);
    assert_eq!(std::fs::read_to_string(&output)?, "[]");
    Ok(())
}

#[test]
fn test_repeated_runs_are_byte_identical() -> Result<()> {
    let dir = TempDir::new()?;
    let input = write_input(&dir, "datospoint.csv", "id,score,ok\n1,9.5,true\n2,,false\n");
    let output = output_path(&dir);

    convert(&input, &output)?;
    let first = std::fs::read(&output)?;
    convert(&input, &output)?;
    let second = std::fs::read(&output)?;

    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_missing_input_fails_without_output() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("datospoint.csv").to_str().unwrap().to_string();
    let output = output_path(&dir);

    let err = convert(&input, &output).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Io);
    assert!(matches!(err, ConvertError::IoError(ref e) if e.kind() == std::io::ErrorKind::NotFound));
    assert!(!std::path::Path::new(&output).exists());
}

#[test]
fn test_malformed_input_is_format_error() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "datospoint.csv", "a,b\n\"never closed,1\n");
    let output = output_path(&dir);

    let err = convert(&input, &output).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Format);
    assert!(!std::path::Path::new(&output).exists());
}

#[test]
fn test_empty_input_is_format_error() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "datospoint.csv", "");
    let output = output_path(&dir);

    let err = convert(&input, &output).unwrap_err();
    assert!(matches!(err, ConvertError::EmptyInputError));
    assert_eq!(err.kind(), ErrorKind::Format);
}

#[test]
fn test_output_directory_is_io_error() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "datospoint.csv", "a\n1\n");
    let output = output_path(&dir);
    std::fs::create_dir(&output).unwrap();

    let err = convert(&input, &output).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Io);
}

#[test]
fn test_engine_with_rooted_storage_uses_default_names() -> Result<()> {
    let dir = TempDir::new()?;
    write_input(&dir, "datospoint.csv", "k,v\nx,1\n");

    let storage = LocalStorage::new(dir.path());
    let pipeline = CsvJsonPipeline::new(storage, ConverterConfig::default());
    let summary = EtlEngine::new(pipeline).run()?;

    assert_eq!(summary.output_path, "output.json");
    let parsed: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(dir.path().join("output.json"))?)?;
    assert_eq!(parsed, json!([{"k": "x", "v": 1}]));
    Ok(())
}

#[test]
fn test_single_column_with_empty_cell_keeps_every_row() -> Result<()> {
    let dir = TempDir::new()?;
    let input = write_input(&dir, "datospoint.csv", "name\nAna\n\"\"\nLuis\n");
    let output = output_path(&dir);

    let summary = convert(&input, &output)?;
    assert_eq!(summary.record_count, 3);

    let parsed: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&output)?)?;
    assert_eq!(
        parsed,
        json!([{"name": "Ana"}, {"name": null}, {"name": "Luis"}])
    );
    Ok(())
}
