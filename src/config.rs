use std::path::{Path, PathBuf};

/// Where the pipeline reads its inputs and writes its reports.
#[derive(Debug, Clone)]
pub struct Config {
    pub root: PathBuf,
    pub catalog_file: String,
    pub directory_file: String,
    pub sales_file_prefix: String,
    pub sales_file_suffix: String,
    pub salesperson_report_file: String,
    pub product_report_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            root: PathBuf::from("."),
            catalog_file: "productos.txt".to_string(),
            directory_file: "vendedores.txt".to_string(),
            sales_file_prefix: "ventas_".to_string(),
            sales_file_suffix: ".txt".to_string(),
            salesperson_report_file: "reporte_vendedores.csv".to_string(),
            product_report_file: "reporte_productos.csv".to_string(),
        }
    }
}

impl Config {
    pub fn with_root(root: impl Into<PathBuf>) -> Config {
        Config {
            root: root.into(),
            ..Config::default()
        }
    }

    pub fn catalog_path(&self) -> PathBuf {
        self.root.join(&self.catalog_file)
    }

    pub fn directory_path(&self) -> PathBuf {
        self.root.join(&self.directory_file)
    }

    pub fn salesperson_report_path(&self) -> PathBuf {
        self.root.join(&self.salesperson_report_file)
    }

    pub fn product_report_path(&self) -> PathBuf {
        self.root.join(&self.product_report_file)
    }

    pub fn is_sales_file(&self, file_name: &str) -> bool {
        file_name.starts_with(&self.sales_file_prefix) && file_name.ends_with(&self.sales_file_suffix)
    }

    pub fn resolve(&self, file_name: impl AsRef<Path>) -> PathBuf {
        self.root.join(file_name)
    }
}
