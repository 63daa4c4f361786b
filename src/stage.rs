use log::{error, info};

pub fn update(stage: Stage) {
    match &stage {
        Stage::Fail(err) => error!("{}: {:#?}", stage.to_string(), err),
        other => info!("{}", other.to_string()),
    }
}

pub enum Stage<'a> {
    ResetCollection,
    SeededCatalog,
    FilteredGenre,
    FilteredRecent,
    FilteredAuthor,
    RepricedBook,
    RemovedBook,
    ProjectedSummaries,
    AveragedPrices,
    RankedAuthors,
    BucketedDecades,
    IndexedCatalog,
    Fail(&'a anyhow::Error),
}

impl<'a> ToString for Stage<'a> {
    fn to_string(&self) -> String {
        let r = match self {
            Self::ResetCollection => "Reset Collection",
            Self::SeededCatalog => "Seeded Catalog",
            Self::FilteredGenre => "Filtered Genre",
            Self::FilteredRecent => "Filtered Recent",
            Self::FilteredAuthor => "Filtered Author",
            Self::RepricedBook => "Repriced Book",
            Self::RemovedBook => "Removed Book",
            Self::ProjectedSummaries => "Projected Summaries",
            Self::AveragedPrices => "Averaged Prices",
            Self::RankedAuthors => "Ranked Authors",
            Self::BucketedDecades => "Bucketed Decades",
            Self::IndexedCatalog => "Indexed Catalog",
            Self::Fail(_) => "Fail",
        };

        r.to_string()
    }
}
