//! Root application component with routing and the session context provider.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{footer::Footer, header::Header};
use crate::net::types::Role;
use crate::pages::{
    about::AboutPage, admin::AdminDashboardPage, ai_tutor::AiTutorPage,
    certificate_verify::CertificateVerifyPage, course_detail::{CourseDetailPage, LearnPage},
    courses::CoursesPage, dashboard::StudentDashboardPage, landing::LandingPage,
    login::LoginPage, payment_success::PaymentSuccessPage, programs::ProgramsPage,
    register::RegisterPage,
};
use crate::session::Session;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Creates the single session for this application load, provides it via
/// context, and kicks off the one-time bootstrap validation.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = Session::new();
    provide_context(session);

    // One bootstrap per application load, not per component mount: this body
    // runs exactly once.
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        session.bootstrap().await;
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/rtc-client.css"/>
        <Title text="Right Tech Centre"/>

        <Router>
            <Header/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=LandingPage/>
                    <Route path=StaticSegment("courses") view=CoursesPage/>
                    <Route
                        path=(StaticSegment("courses"), ParamSegment("id"))
                        view=CourseDetailPage
                    />
                    <Route path=StaticSegment("programs") view=ProgramsPage/>
                    <Route path=StaticSegment("about") view=AboutPage/>
                    <Route path=StaticSegment("ai-tutor") view=AiTutorPage/>
                    <Route path=StaticSegment("verify") view=CertificateVerifyPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route
                        path=(StaticSegment("payment"), StaticSegment("success"))
                        view=PaymentSuccessPage
                    />
                    <Route path=StaticSegment("dashboard") view=StudentDashboardPage/>
                    <Route path=StaticSegment("my-courses") view=StudentDashboardPage/>
                    <Route path=StaticSegment("certificates") view=StudentDashboardPage/>
                    <Route
                        path=StaticSegment("admin")
                        view=|| view! { <AdminDashboardPage required=Role::Admin/> }
                    />
                    <Route
                        path=StaticSegment("instructor")
                        view=|| view! { <AdminDashboardPage required=Role::Instructor/> }
                    />
                    <Route
                        path=(StaticSegment("learn"), ParamSegment("id"))
                        view=LearnPage
                    />
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}
