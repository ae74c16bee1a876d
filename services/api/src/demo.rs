use crate::infra::sample_records;
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;
use supplier_ai::error::AppError;
use supplier_ai::{
    CsvRecordSource, EngineOptions, InMemoryRecordSource, SupplierAnalysis, SupplierDataset,
    SupplierIntelligence,
};

#[derive(Args, Debug)]
pub(crate) struct AnalyzeArgs {
    /// Path to the supplier dataset CSV
    #[arg(long)]
    pub(crate) dataset: PathBuf,
    /// Supplier name to analyze (exact or substring)
    pub(crate) supplier: String,
}

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Free-text query to rank the sample suppliers against
    #[arg(long, default_value = "high quality supplier with fast delivery")]
    pub(crate) query: String,
}

pub(crate) async fn run_analysis(args: AnalyzeArgs) -> Result<(), AppError> {
    let dataset = Arc::new(SupplierDataset::new(Arc::new(CsvRecordSource::new(
        args.dataset,
    ))));
    let engine = SupplierIntelligence::new(dataset, EngineOptions::default());

    let analysis = engine.analyze(&args.supplier).await?;
    print_analysis(&analysis);
    Ok(())
}

pub(crate) async fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let dataset = Arc::new(SupplierDataset::new(Arc::new(InMemoryRecordSource::new(
        sample_records(),
    ))));
    let engine = SupplierIntelligence::new(dataset, EngineOptions::default());

    println!("== Retrieval: \"{}\" ==", args.query);
    for (rank, record) in engine.retrieve(&args.query, 5).await?.iter().enumerate() {
        println!("  {}. {} ({})", rank + 1, record.name, record.location);
    }

    let comparison = engine.compare("Apex Metals", "Budget Castings").await?;
    println!("\n== Comparison: Apex Metals vs Budget Castings ==");
    println!(
        "  overall {:.2} vs {:.2}, winner: {}",
        comparison.score_a, comparison.score_b, comparison.winner
    );
    println!("  {}", comparison.recommendation);

    let prediction = engine.predict("Lakshmi Precision").await?;
    println!("\n== Prediction: Lakshmi Precision ==");
    println!(
        "  trend {} at {:.1}% confidence (current {:.2})",
        prediction.predicted_trend, prediction.confidence, prediction.current_performance
    );
    for risk in &prediction.risk_factors {
        println!("  risk: {risk}");
    }
    println!("  {}", prediction.recommendation);

    let analysis = engine.analyze("Apex Metals").await?;
    println!("\n== Analysis: Apex Metals ==");
    print_analysis(&analysis);

    let reply = engine.chat_response("which supplier is best overall?").await?;
    println!("\n== Chat ==\n  {reply}");
    Ok(())
}

fn print_analysis(analysis: &SupplierAnalysis) {
    println!(
        "  {} ({}, employees: {})",
        analysis.overview.name,
        analysis.overview.location,
        match analysis.overview.employees {
            Some(count) => count.to_string(),
            None => "unverified".to_string(),
        }
    );
    println!(
        "  overall {:.2}, quality {:.1}, financial stability {:.2}",
        analysis.recommendation.overall_score,
        analysis.key_performance.quality_score,
        analysis.financial_strength.overall_stability
    );
    println!(
        "  cost/reliability: ratio {:.2}, {:?} delivery consistency, terms: {}",
        analysis.cost_reliability.cost_reliability_ratio,
        analysis.operational_risk.delivery_consistency,
        analysis.cost_reliability.payment_terms
    );
    println!(
        "  operational risk: traffic {:?}, logistics {:.1}",
        analysis.operational_risk.traffic_risk, analysis.operational_risk.logistics_score
    );
    for strength in &analysis.recommendation.strengths {
        println!("  strength: {strength}");
    }
    for weakness in &analysis.recommendation.weaknesses {
        println!("  weakness: {weakness}");
    }
    println!("  best use: {}", analysis.recommendation.best_use_case);
    println!("  confidence: {:.0}%", analysis.confidence_score);
}
