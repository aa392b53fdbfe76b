//! Landing page.

use super::{Navigation, PortalContext};
use crate::session::SessionError;

/// A hard-coded listing shown on the landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeaturedJob {
    pub id: u32,
    pub title: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub description: &'static str,
}

pub const FEATURED_JOBS: [FeaturedJob; 4] = [
    FeaturedJob {
        id: 1,
        title: "Frontend Developer",
        company: "TechCorp",
        location: "Remote",
        description: "Build responsive web applications using React and Tailwind CSS.",
    },
    FeaturedJob {
        id: 2,
        title: "Backend Engineer",
        company: "DataSys",
        location: "San Francisco, CA",
        description: "Develop scalable APIs with Node.js and MongoDB.",
    },
    FeaturedJob {
        id: 3,
        title: "UI/UX Designer",
        company: "CreativeLabs",
        location: "New York, NY",
        description: "Design intuitive user interfaces for mobile and web platforms.",
    },
    FeaturedJob {
        id: 4,
        title: "DevOps Engineer",
        company: "CloudNet",
        location: "Austin, TX",
        description: "Manage CI/CD pipelines and cloud infrastructure.",
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeScreen {
    /// The landing page carries its own nav bar for visitors; signed-in users get the main navbar.
    pub show_public_nav: bool,
    pub is_dark_mode: bool,
    pub featured: &'static [FeaturedJob],
}

pub struct HomeView {
    ctx: PortalContext,
}

impl HomeView {
    pub fn new(ctx: &PortalContext) -> Self {
        Self { ctx: ctx.clone() }
    }

    pub async fn render(&self) -> Result<HomeScreen, SessionError> {
        let state = self.ctx.session.state().await?;
        Ok(HomeScreen {
            show_public_nav: state.current_user.is_none(),
            is_dark_mode: state.is_dark_mode,
            featured: &FEATURED_JOBS,
        })
    }

    pub async fn toggle_dark_mode(&self) -> Result<bool, SessionError> {
        Ok(self.ctx.session.toggle_dark_mode().await?.is_dark_mode)
    }

    /// "Browse Jobs", "Post a Job" and "Explore More" all lead here.
    pub fn browse(&self) -> Navigation {
        Navigation::to("/jobs")
    }

    /// Featured cards send visitors to sign in first.
    pub fn open_featured(&self, _id: u32) -> Navigation {
        Navigation::to("/login")
    }
}
