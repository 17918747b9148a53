use sssp_core::format::OutputFormat;
use sssp_core::graph::Algorithm;

/// Parse output format from string
pub fn parse_output_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse algorithm identifier from string
pub fn parse_algorithm(s: &str) -> std::result::Result<Algorithm, String> {
    s.parse::<Algorithm>().map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_algorithm() {
        assert_eq!(parse_algorithm("dijkstra"), Ok(Algorithm::Dijkstra));
        assert_eq!(parse_algorithm("topo-relax"), Ok(Algorithm::TopoRelax));
        let err = parse_algorithm("prim").unwrap_err();
        assert!(err.contains("unknown algorithm: prim"));
    }

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("json"), Ok(OutputFormat::Json));
        assert!(parse_output_format("yaml").is_err());
    }
}
