// Injected once by the app; the markup owns no other stylesheet.
pub const PAGE_STYLES: &str = r#"
.btn-custom, .card, .skill-badge {
    position: relative;
    overflow: hidden;
}
.ripple {
    position: absolute;
    border-radius: 50%;
    background: rgba(255, 255, 255, 0.3);
    transform: scale(0);
    animation: ripple-animation 0.6s ease-out;
    pointer-events: none;
}
@keyframes ripple-animation {
    to {
        transform: scale(2);
        opacity: 0;
    }
}
.reveal {
    opacity: 0;
    transform: translateY(30px);
    transition: opacity 0.8s ease-out, transform 0.8s ease-out;
}
.reveal.visible {
    opacity: 1;
    transform: translateY(0);
}
.card-shine {
    position: absolute;
    top: 0;
    left: 0;
    right: 0;
    bottom: 0;
    border-radius: 24px;
    pointer-events: none;
    transition: background 0.3s ease;
}
#scroll-progress {
    position: fixed;
    top: 0;
    left: 0;
    width: 0;
    height: 4px;
    background: linear-gradient(90deg, rgb(99, 102, 241), rgb(236, 72, 153));
    z-index: 1000;
}
.hero {
    position: relative;
    overflow: hidden;
}
.shape {
    position: absolute;
    border-radius: 50%;
    opacity: 0.15;
    pointer-events: none;
    will-change: transform;
}
.shape-1 {
    top: 10%;
    left: 5%;
    width: 300px;
    height: 300px;
    background: rgb(99, 102, 241);
}
.shape-2 {
    top: 40%;
    right: 10%;
    width: 200px;
    height: 200px;
    background: rgb(236, 72, 153);
}
.shape-3 {
    bottom: 5%;
    left: 40%;
    width: 150px;
    height: 150px;
    background: rgb(14, 165, 233);
}
.modal {
    display: none;
    position: fixed;
    inset: 0;
    align-items: center;
    justify-content: center;
    background: rgba(15, 23, 42, 0.7);
    z-index: 2000;
}
.modal.active {
    display: flex;
}
.modal-content {
    position: relative;
    max-width: 560px;
    width: 90%;
    padding: 32px;
    border-radius: 24px;
    background: #ffffff;
}
.modal-close {
    position: absolute;
    top: 12px;
    right: 16px;
    border: none;
    background: transparent;
    font-size: 24px;
    cursor: pointer;
}
.contact-item {
    cursor: pointer;
}
.contact-item.copying {
    animation: copy-pulse 0.4s ease-out;
}
@keyframes copy-pulse {
    50% {
        transform: scale(1.05);
    }
}
.copy-notification {
    position: fixed;
    bottom: 24px;
    right: 24px;
    padding: 12px 20px;
    border-radius: 12px;
    background: rgb(99, 102, 241);
    color: #ffffff;
    opacity: 0;
    transform: translateX(400px);
    transition: opacity 0.3s ease, transform 0.3s ease;
    z-index: 3000;
}
"#;
