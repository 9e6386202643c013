use super::aggregate::Video;
use crate::domain::validation::{ValidationError, ValidationHandler};
use crate::error::Result;

/// Field rules for [`Video`], checked in declaration order.
#[derive(Debug)]
pub struct VideoValidator<'a> {
    video: &'a Video,
}

impl<'a> VideoValidator<'a> {
    pub fn new(video: &'a Video) -> Self {
        Self { video }
    }

    pub fn validate(&self, handler: &mut dyn ValidationHandler) -> Result<()> {
        self.check_title(handler)?;
        self.check_required(handler, "description", self.video.description())?;
        self.check_required(handler, "launchedAt", self.video.launched_at())?;
        self.check_duration(handler)?;
        self.check_required(handler, "opened", self.video.opened())?;
        self.check_required(handler, "published", self.video.published())?;
        // unknown rating labels resolve to None and surface here as well
        self.check_required(handler, "rating", self.video.rating())
    }

    fn check_title(&self, handler: &mut dyn ValidationHandler) -> Result<()> {
        match self.video.title() {
            None => handler.append(null_error("title")),
            Some(title) if title.trim().is_empty() => handler
                .append(ValidationError::new("'title' should not be empty")),
            Some(_) => Ok(()),
        }
    }

    fn check_duration(&self, handler: &mut dyn ValidationHandler) -> Result<()> {
        match self.video.duration() {
            None => handler.append(null_error("duration")),
            Some(duration) if duration.is_nan() || duration < 0.0 => handler.append(
                ValidationError::new("'duration' should not be negative"),
            ),
            Some(_) => Ok(()),
        }
    }

    fn check_required<T>(
        &self,
        handler: &mut dyn ValidationHandler,
        field: &str,
        value: Option<T>,
    ) -> Result<()> {
        if value.is_none() {
            handler.append(null_error(field))?;
        }
        Ok(())
    }
}

fn null_error(field: &str) -> ValidationError {
    ValidationError::new(format!("'{field}' should not be null"))
}
